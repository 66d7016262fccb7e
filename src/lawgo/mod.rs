// law.go.kr Open API — fetching the national statute registry.
//
// Each submodule handles one concern: the HTTP client, the wire schema
// and its normalization into StatuteRecord, the paged year fetch, and
// request pacing.

pub mod client;
pub mod fetch;
pub mod rate_limit;
pub mod schema;
