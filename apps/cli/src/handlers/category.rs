use depot::domain::LicenseCategories;

/// `5` prints `A, C`; bits outside A..E are ignored.
#[must_use]
pub fn category_label(mask: u32) -> String {
    LicenseCategories::from_mask(mask).label()
}
