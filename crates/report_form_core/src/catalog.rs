/// A single selectable stock inside a sector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stock {
    pub ticker: String,
    pub name: String,
}

impl Stock {
    pub fn new(name: impl Into<String>, ticker: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
            name: name.into(),
        }
    }

    /// Text shown in the stock selector: `"{name} ({ticker})"`.
    pub fn option_label(&self) -> String {
        format!("{} ({})", self.name, self.ticker)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sector {
    pub name: String,
    pub stocks: Vec<Stock>,
}

/// Sector name -> stocks, in the order the server listed them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StockCatalog {
    sectors: Vec<Sector>,
}

impl StockCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from `(sector, stocks)` pairs. A repeated sector name
    /// keeps its first position and takes the later stock list.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<Stock>)>,
    {
        let mut catalog = Self::new();
        for (name, stocks) in pairs {
            catalog.insert(name, stocks);
        }
        catalog
    }

    pub fn insert(&mut self, name: String, stocks: Vec<Stock>) {
        match self.sectors.iter_mut().find(|sector| sector.name == name) {
            Some(existing) => existing.stocks = stocks,
            None => self.sectors.push(Sector { name, stocks }),
        }
    }

    pub fn sector_names(&self) -> impl Iterator<Item = &str> {
        self.sectors.iter().map(|sector| sector.name.as_str())
    }

    pub fn sectors(&self) -> &[Sector] {
        &self.sectors
    }

    pub fn stocks_for(&self, sector: &str) -> Option<&[Stock]> {
        self.sectors
            .iter()
            .find(|candidate| candidate.name == sector)
            .map(|found| found.stocks.as_slice())
    }

    pub fn len(&self) -> usize {
        self.sectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sectors.is_empty()
    }
}
