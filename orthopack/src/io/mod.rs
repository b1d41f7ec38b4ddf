/// External (serializable) representations of the entities within the library.
pub mod ext_repr;

/// Parsing of the plain-text instance format
pub mod parse;

/// All logic for converting external representations into internal ones
pub mod import;

/// All logic for exporting internal representations into external ones
pub mod export;

/// Rendering of layouts as SVG documents
pub mod svg;
