use serde_json::{Map, Value};

/// One issue, reconstituted from a CSV row.
///
/// A field value is statically either scalar (`Value::String` or
/// `Value::Null`) or an ordered sequence of strings (`Value::Array`), decided
/// per page by that page's header shape rather than inferred from the values
/// themselves. After [`parse_records`](crate::parsers::parse_records) runs,
/// fields targeted by the parser table hold arrays of objects instead.
///
/// The field set may differ between records of the same stream when the
/// server's schema drifts between pages; consumers must tolerate missing
/// keys.
pub type Record = Map<String, Value>;
