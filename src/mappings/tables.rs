pub(super) const CLASSES: &[(&str, &str)] = &[
    ("table", "table display"),
    ("inline-table", "inline table display"),
    ("table-caption", "table caption display"),
    ("table-cell", "table cell display"),
    ("table-column", "table column display"),
    ("table-column-group", "table column group display"),
    ("table-footer-group", "table footer group display"),
    ("table-header-group", "table header group display"),
    ("table-row-group", "table row group display"),
    ("table-row", "table row display"),
    ("table-auto", "automatic table layout"),
    ("table-fixed", "fixed table layout"),
    ("border-collapse", "collapsed table borders"),
    ("border-separate", "separated table borders"),
    ("caption-top", "caption above table"),
    ("caption-bottom", "caption below table"),
];
