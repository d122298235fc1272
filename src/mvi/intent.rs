/// An input to a [`Reducer`](super::Reducer): a host request or a clock tick.
pub trait Intent: Send + 'static {}
