//! Deep links into each library's published documentation.

/// Library stem to documentation base page. Keys follow the full
/// libdoc library name, so `DatabaseLibrary` rather than the
/// `Database` shorthand.
const LIB_DOC_BASE: &[(&str, &str)] = &[
    (
        "Browser",
        "https://marketsquare.github.io/robotframework-browser/Browser.html",
    ),
    (
        "BuiltIn",
        "https://robotframework.org/robotframework/latest/libraries/BuiltIn.html",
    ),
    (
        "Collections",
        "https://robotframework.org/robotframework/latest/libraries/Collections.html",
    ),
    (
        "DatabaseLibrary",
        "https://marketsquare.github.io/Robotframework-Database-Library/",
    ),
    (
        "DateTime",
        "https://robotframework.org/robotframework/latest/libraries/DateTime.html",
    ),
    (
        "FakerLibrary",
        "https://marketsquare.github.io/robotframework-faker/",
    ),
    (
        "OperatingSystem",
        "https://robotframework.org/robotframework/latest/libraries/OperatingSystem.html",
    ),
    (
        "Process",
        "https://robotframework.org/robotframework/latest/libraries/Process.html",
    ),
    (
        "RequestsLibrary",
        "https://marketsquare.github.io/robotframework-requests/doc/RequestsLibrary.html",
    ),
    (
        "Screenshot",
        "https://robotframework.org/robotframework/latest/libraries/Screenshot.html",
    ),
    (
        "SeleniumLibrary",
        "https://robotframework.org/SeleniumLibrary/SeleniumLibrary.html",
    ),
    (
        "String",
        "https://robotframework.org/robotframework/latest/libraries/String.html",
    ),
    (
        "XML",
        "https://robotframework.org/robotframework/latest/libraries/XML.html",
    ),
];

/// Build the documentation deep link for a keyword.
///
/// The anchor is the percent-encoded keyword name, casing preserved
/// and spaces as `%20`. Libraries without a known documentation page
/// get an empty string.
pub fn doc_url(library: &str, keyword: &str) -> String {
    let Some(base) = base_url(library) else {
        return String::new();
    };
    // Bases ending in a bare path component need a separator before
    // the anchor.
    let separator = if base.ends_with('/') || base.ends_with(".html") {
        ""
    } else {
        "/"
    };
    format!("{base}{separator}#{}", urlencoding::encode(keyword))
}

fn base_url(library: &str) -> Option<&'static str> {
    LIB_DOC_BASE
        .iter()
        .find(|(name, _)| *name == library)
        .map(|(_, url)| *url)
}
