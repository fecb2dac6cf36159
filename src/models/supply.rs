/// One generation source in the instantaneous supply mix
#[derive(Debug, Clone, PartialEq)]
pub struct SupplySource {
    pub source: String,
    pub mw: f64,
    /// Display hint, usually a hex color
    pub color: String,
}

impl SupplySource {
    pub fn new(source: impl Into<String>, mw: f64, color: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            mw,
            color: color.into(),
        }
    }
}

/// Supply source with its share of the total precomputed
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub source: String,
    pub mw: f64,
    pub color: String,
    pub percentage: f64,
}

pub fn total_supply(sources: &[SupplySource]) -> f64 {
    sources.iter().map(|s| s.mw).sum()
}

/// Computes each source's share of the total.
///
/// A zero total yields 0% for every slice rather than NaN.
pub fn pie_slices(sources: &[SupplySource]) -> Vec<PieSlice> {
    let total = total_supply(sources);

    sources
        .iter()
        .map(|s| PieSlice {
            source: s.source.clone(),
            mw: s.mw,
            color: s.color.clone(),
            percentage: if total > 0.0 { s.mw / total * 100.0 } else { 0.0 },
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowDirection {
    /// More leaves the grid than enters it
    Export,
    Import,
    Balanced,
}

impl FlowDirection {
    /// Returns CSS class name for color coding
    pub fn css_class(&self) -> &'static str {
        match self {
            FlowDirection::Export => "net-flow-export",
            FlowDirection::Import => "net-flow-import",
            FlowDirection::Balanced => "net-flow-balanced",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FlowDirection::Export => "Net exporter",
            FlowDirection::Import => "Net importer",
            FlowDirection::Balanced => "Balanced",
        }
    }
}

/// Hourly interchange with neighbouring grids
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NetFlow {
    pub imports: f64,
    pub exports: f64,
}

impl NetFlow {
    pub fn new(imports: f64, exports: f64) -> Self {
        Self { imports, exports }
    }

    /// Exports minus imports; positive means the region is a net exporter
    pub fn net(&self) -> f64 {
        self.exports - self.imports
    }

    pub fn direction(&self) -> FlowDirection {
        let net = self.net();
        if net > 0.0 {
            FlowDirection::Export
        } else if net < 0.0 {
            FlowDirection::Import
        } else {
            FlowDirection::Balanced
        }
    }
}

/// Validated contents of the latest hourly supply document
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SupplySnapshot {
    pub sources: Vec<SupplySource>,
    pub imports: Option<f64>,
    pub exports: Option<f64>,
    pub fetched_at: Option<String>,
    pub file_key: Option<String>,
}

impl SupplySnapshot {
    /// Net flow is only defined once both sides are known
    pub fn net_flow(&self) -> Option<NetFlow> {
        Some(NetFlow::new(self.imports?, self.exports?))
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty() && self.imports.is_none() && self.exports.is_none()
    }
}
