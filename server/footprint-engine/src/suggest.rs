//! Advisory lines per (category, advice band), from a fixed table.

use crate::severity::AdviceBand;
use crate::types::{Category, EmissionsResult, SuggestionSet};

struct AdviceEntry {
  category: Category,
  band: AdviceBand,
  lines: &'static [&'static str],
}

/// Product copy, verbatim. The first line of each entry opens with the band
/// preamble.
const ADVICE_TABLE: &[AdviceEntry] = &[
  AdviceEntry {
    category: Category::Energy,
    band: AdviceBand::VeryHigh,
    lines: &[
      "#Your emissions are very high.Consider the following actions:-\n -Using energy-efficient appliances and LED lighting.",
      "Switching to renewable energy sources like solar or wind.",
      "Reducing overall energy consumption with smart home devices.",
    ],
  },
  AdviceEntry {
    category: Category::Energy,
    band: AdviceBand::Moderate,
    lines: &[
      "#Your emissions are moderate. You can further reduce them by:\n -Improving home insulation to save on heating/cooling energy.",
      "Using appliances during off-peak hours to reduce strain on energy grids.",
    ],
  },
  AdviceEntry {
    category: Category::Energy,
    band: AdviceBand::Low,
    lines: &[
      "#Great job! Your emissions are low.\n Here are additional tips to maintain or improve:\n -Maintain efficiency by monitoring energy usage regularly.",
      "Explore net-zero energy solutions like solar panels.",
    ],
  },
  AdviceEntry {
    category: Category::Transportation,
    band: AdviceBand::VeryHigh,
    lines: &[
      "#Your emissions are very high.Consider the following actions:-\n -Carpooling, using public transport, or biking more frequently.",
      "Switching to hybrid or electric vehicles to reduce fuel use.",
      "Reducing long-distance travel whenever possible.",
    ],
  },
  AdviceEntry {
    category: Category::Transportation,
    band: AdviceBand::Moderate,
    lines: &[
      "#Your emissions are moderate. You can further reduce them by:\n-Optimizing routes to save fuel.",
      "Combining errands to reduce overall mileage.",
    ],
  },
  AdviceEntry {
    category: Category::Transportation,
    band: AdviceBand::Low,
    lines: &[
      "#Great job! Your emissions are low. Here are additional tips to maintain or improve:\n-Keep up eco-friendly travel habits like walking or biking.",
      "Encourage others to adopt sustainable travel options.",
    ],
  },
  AdviceEntry {
    category: Category::Waste,
    band: AdviceBand::VeryHigh,
    lines: &[
      "#Your emissions are very high.Consider the following actions:-\n -Increasing recycling efforts and composting organic waste.",
      "Avoiding single-use plastics and opting for reusable products.",
      "Reducing food waste by planning meals and proper storage.",
    ],
  },
  AdviceEntry {
    category: Category::Waste,
    band: AdviceBand::Moderate,
    lines: &[
      "#Your emissions are moderate. You can further reduce them by:\n -Expanding recycling habits (e.g., e-waste and paper).",
      "Donating items instead of discarding them.",
    ],
  },
  AdviceEntry {
    category: Category::Waste,
    band: AdviceBand::Low,
    lines: &[
      "#Great job! Your emissions are low. Here are additional tips to maintain or improve:\n -Maintain minimal waste by reducing, reusing, and recycling.",
      "Continue composting organic waste to keep emissions low.",
    ],
  },
];

/// Advice lines for one (category, band) cell of the table.
pub fn advice(category: Category, band: AdviceBand) -> &'static [&'static str] {
  ADVICE_TABLE
    .iter()
    .find(|e| e.category == category && e.band == band)
    .map(|e| e.lines)
    .unwrap_or(&[])
}

/// Pick advice for every category, banding each value independently.
pub fn suggest(emissions: &EmissionsResult) -> SuggestionSet {
  let lines_for = |category: Category| -> Vec<String> {
    let band = AdviceBand::for_tons(emissions.get(category));
    advice(category, band).iter().map(|s| s.to_string()).collect()
  };
  SuggestionSet {
    energy: lines_for(Category::Energy),
    transportation: lines_for(Category::Transportation),
    waste: lines_for(Category::Waste),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const BANDS: [AdviceBand; 3] = [AdviceBand::Low, AdviceBand::Moderate, AdviceBand::VeryHigh];

  #[test]
  fn table_covers_every_cell_with_expected_length() {
    for category in Category::ALL {
      for band in BANDS {
        let lines = advice(category, band);
        let expected = if band == AdviceBand::VeryHigh { 3 } else { 2 };
        assert_eq!(lines.len(), expected, "{:?}/{:?}", category, band);
        assert!(lines[0].starts_with('#'), "{:?}/{:?} preamble", category, band);
      }
    }
    assert_eq!(ADVICE_TABLE.len(), 9);
  }

  #[test]
  fn preamble_matches_band() {
    for category in Category::ALL {
      assert!(advice(category, AdviceBand::VeryHigh)[0].starts_with("#Your emissions are very high."));
      assert!(advice(category, AdviceBand::Moderate)[0].starts_with("#Your emissions are moderate."));
      assert!(advice(category, AdviceBand::Low)[0].starts_with("#Great job! Your emissions are low."));
    }
  }

  #[test]
  fn wording_differs_per_category() {
    for band in BANDS {
      let energy = advice(Category::Energy, band);
      let transport = advice(Category::Transportation, band);
      let waste = advice(Category::Waste, band);
      assert_ne!(energy[1], transport[1]);
      assert_ne!(transport[1], waste[1]);
    }
  }

  #[test]
  fn suggest_bands_each_category_independently() {
    let emissions = EmissionsResult {
      energy: 2.6532,
      transportation: 11.76,
      waste: 0.09,
    };
    let set = suggest(&emissions);
    assert_eq!(set.energy.len(), 2);
    assert!(set.energy[0].contains("moderate"));
    assert_eq!(set.transportation.len(), 3);
    assert_eq!(
      set.transportation[2],
      "Reducing long-distance travel whenever possible."
    );
    assert_eq!(set.waste.len(), 2);
    assert!(set.waste[0].contains("low"));
  }

  #[test]
  fn four_tons_is_still_moderate_advice() {
    let set = suggest(&EmissionsResult {
      energy: 4.0,
      transportation: 4.0001,
      waste: 1.5,
    });
    assert!(set.energy[0].contains("moderate"));
    assert!(set.transportation[0].contains("very high"));
    assert!(set.waste[0].contains("moderate"));
  }
}
