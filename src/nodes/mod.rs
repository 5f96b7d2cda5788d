//! Built-in node behaviors.
//!
//! Each behavior is a state machine implemented purely in terms of the
//! node/port/hub substrate: private state lives behind the input handlers,
//! results leave through output hubs.

pub mod channel_sink;
pub mod demuxer;
pub mod filter;
pub mod gate;
pub mod sampler;
pub mod stdout;

pub use channel_sink::{ChannelSink, ChannelSinkInputs};
pub use demuxer::{Demuxer, DemuxerInputs, DemuxerOutputs, Muxed};
pub use filter::{Filter, FilterInputs, FilterOutputs};
pub use gate::{Gate, GateInputs, GateOutputs, Gated};
pub use sampler::{Sampler, SamplerInputs, SamplerOutputs};
pub use stdout::{StdOut, StdOutInputs};
