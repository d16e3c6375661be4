use serde::Deserialize;

use crate::CatalogLoadError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListedStock {
    pub name: String,
    pub ticker: String,
}

/// Sectors with their stocks, in the order the server sent them.
pub type CatalogListing = Vec<(String, Vec<ListedStock>)>;

/// Parses `{ "<sector>": [{"name": .., "ticker": ..}, ..], .. }` keeping key order.
pub fn parse_listing(body: &[u8]) -> Result<CatalogListing, CatalogLoadError> {
    let object: serde_json::Map<String, serde_json::Value> = serde_json::from_slice(body)
        .map_err(|err| CatalogLoadError::Malformed(err.to_string()))?;

    object
        .into_iter()
        .map(|(sector, stocks)| {
            let stocks: Vec<ListedStock> = serde_json::from_value(stocks).map_err(|err| {
                CatalogLoadError::Malformed(format!("sector {sector:?}: {err}"))
            })?;
            Ok((sector, stocks))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_server_key_order() {
        let body = br#"{"Zinc": [], "Auto": [{"name": "Bajaj Auto", "ticker": "BAJAJ-AUTO.NS"}], "Banks": []}"#;
        let listing = parse_listing(body).unwrap();
        let names: Vec<_> = listing.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["Zinc", "Auto", "Banks"]);
        assert_eq!(listing[1].1[0].ticker, "BAJAJ-AUTO.NS");
    }

    #[test]
    fn rejects_non_object_payload() {
        assert!(matches!(
            parse_listing(b"[1, 2]"),
            Err(CatalogLoadError::Malformed(_))
        ));
    }

    #[test]
    fn rejects_stock_without_ticker() {
        let err = parse_listing(br#"{"IT": [{"name": "Infosys"}]}"#).unwrap_err();
        match err {
            CatalogLoadError::Malformed(message) => assert!(message.contains("IT")),
            other => panic!("unexpected error {other:?}"),
        }
    }
}
