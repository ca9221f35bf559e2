/// Configuration options for permit emission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmitOptions {
    /// Render the filter field as `filter?:` instead of `filter:`
    pub filter_optional: bool,
}

impl EmitOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options with the filter marked optional
    pub fn optional_filter() -> Self {
        Self {
            filter_optional: true,
        }
    }
}
