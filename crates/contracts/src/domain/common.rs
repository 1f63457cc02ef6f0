/// What every catalog record shares: a server-assigned identity, a label to
/// show when the record is named in the UI, and its path under the API origin.
///
/// The id is assigned by the server and immutable from the client's
/// perspective; drafts carry no id at all.
pub trait CatalogRecord: Clone {
    /// Server-assigned id.
    fn record_id(&self) -> i64;

    /// Human-readable label, used by delete confirmations and row keys.
    fn display_label(&self) -> &str;

    /// Resource path under the API origin, e.g. `/Categories`.
    fn resource_path() -> &'static str;
}
