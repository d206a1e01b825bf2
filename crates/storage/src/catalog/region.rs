/// The region catalog: the Czech regions plus a catch-all. Clubs reference
/// these by id; the table itself is never written to.
pub const REGIONS: &[(i32, &str)] = &[
    (1, "Hlavní město Praha"),
    (2, "Středočeský kraj"),
    (3, "Jihočeský kraj"),
    (4, "Plzeňský kraj"),
    (5, "Karlovarský kraj"),
    (6, "Ústecký kraj"),
    (7, "Liberecký kraj"),
    (8, "Královéhradecký kraj"),
    (9, "Pardubický kraj"),
    (10, "Kraj Vysočina"),
    (11, "Jihomoravský kraj"),
    (12, "Olomoucký kraj"),
    (13, "Zlínský kraj"),
    (14, "Moravskoslezský kraj"),
    (15, "Other"),
];

pub const OTHER_REGION_ID: i32 = 15;

/// Display name for a region id, if the id is part of the catalog.
pub fn region_name(id: i32) -> Option<&'static str> {
    REGIONS.iter().find(|(rid, _)| *rid == id).map(|(_, n)| *n)
}

/// Reverse lookup by display name, case-insensitive.
pub fn region_by_name(name: &str) -> Option<i32> {
    REGIONS
        .iter()
        .find(|(_, n)| n.eq_ignore_ascii_case(name))
        .map(|(id, _)| *id)
}
