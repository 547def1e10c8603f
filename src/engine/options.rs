/// Options for reading serialized geometries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadOptions {
    /// Close polygon rings whose last coordinate differs from the first, instead of rejecting
    /// the input.
    fix_structure: bool,
}

impl ReadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repair unclosed polygon rings while reading.
    ///
    /// Defaults to `false`, in which case an unclosed ring is a parse error.
    pub fn with_fix_structure(self, fix_structure: bool) -> Self {
        Self { fix_structure }
    }

    pub fn fix_structure(&self) -> bool {
        self.fix_structure
    }
}
