//! Known market indices a plan can track.
//!
//! Symbols follow the Yahoo Finance convention used by the price provider.

/// Display information for a market index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarketIndex {
    pub symbol: &'static str,
    pub name: &'static str,
    pub region: &'static str,
}

pub const MARKET_INDICES: &[MarketIndex] = &[
    MarketIndex {
        symbol: "^GSPC",
        name: "S&P 500",
        region: "USA, 500 large companies",
    },
    MarketIndex {
        symbol: "^NDX",
        name: "NASDAQ 100",
        region: "USA, technology companies",
    },
    MarketIndex {
        symbol: "^DJI",
        name: "Dow Jones",
        region: "USA, 30 blue chip companies",
    },
    MarketIndex {
        symbol: "^FTSE",
        name: "FTSE 100",
        region: "UK, British companies",
    },
    MarketIndex {
        symbol: "^GDAXI",
        name: "DAX",
        region: "Germany, 40 large companies",
    },
    MarketIndex {
        symbol: "^FCHI",
        name: "CAC 40",
        region: "France",
    },
    MarketIndex {
        symbol: "^N225",
        name: "Nikkei 225",
        region: "Japan",
    },
    MarketIndex {
        symbol: "^HSI",
        name: "Hang Seng",
        region: "Hong Kong",
    },
    MarketIndex {
        symbol: "000001.SS",
        name: "Shanghai Composite",
        region: "China",
    },
    MarketIndex {
        symbol: "^BVSP",
        name: "Bovespa",
        region: "Brazil",
    },
];

/// Look up a known index by symbol (case-insensitive)
#[must_use]
pub fn find_index(symbol: &str) -> Option<&'static MarketIndex> {
    MARKET_INDICES
        .iter()
        .find(|index| index.symbol.eq_ignore_ascii_case(symbol))
}

/// Human readable label, falling back to the raw symbol for unknown indices
#[must_use]
pub fn index_label(symbol: &str) -> String {
    match find_index(symbol) {
        Some(index) => format!("{} ({})", index.name, index.region),
        None => symbol.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_index() {
        let sp = find_index("^GSPC").unwrap();
        assert_eq!(sp.name, "S&P 500");
        assert_eq!(find_index("^gdaxi").unwrap().name, "DAX");
        assert!(find_index("^XYZ").is_none());
    }

    #[test]
    fn test_symbols_are_unique() {
        for (i, a) in MARKET_INDICES.iter().enumerate() {
            for b in &MARKET_INDICES[i + 1..] {
                assert_ne!(a.symbol, b.symbol);
            }
        }
        assert_eq!(MARKET_INDICES.len(), 10);
    }

    #[test]
    fn test_index_label_fallback() {
        assert_eq!(index_label("^N225"), "Nikkei 225 (Japan)");
        assert_eq!(index_label("VTI"), "VTI");
    }
}
