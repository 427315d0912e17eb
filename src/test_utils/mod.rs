//! Sample articles for the unit tests. `tests/common` carries the same set.

pub mod fixtures {
    pub const GUIDE_TITLE: &str = "iPhone 14 Pro Max Screen Replacement Guide";

    /// Repair guide in the blog's markdown flavour, a little over 400 words.
    pub const GUIDE_CONTENT: &str = include_str!("../../tests/fixtures/screen_replacement_guide.md");

    pub const SHORT_TITLE: &str = "Quick Battery Tips";

    /// Well under 300 words.
    pub const SHORT_CONTENT: &str = "Keep your battery cool. Charge it before it drops too low. \
        Unplug it once it is full. A healthy battery lasts for years.";
}
