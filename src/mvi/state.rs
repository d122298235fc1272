/// State owned by a widget and replaced wholesale on every dispatch.
///
/// `Default` is the resting state; `PartialEq` lets callers skip work when
/// a dispatch changed nothing.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
