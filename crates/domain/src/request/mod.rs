//! Stored request model

mod body;
mod entries;
mod form_data;
mod header;
mod method;
mod query;
mod spec;

pub use body::{BinaryFile, BodyType, GraphQlBody, RawBodyKind, RequestBody};
pub use entries::{Entries, Toggle};
pub use form_data::{FormDataPart, FormDataPartType};
pub use header::{Header, Headers};
pub use method::HttpMethod;
pub use query::{QueryParam, QueryParams};
pub use spec::{RequestSpec, TransportType};
