pub mod batch;
pub mod encoder;
pub mod testing;

pub use batch::{
    convert_directory, BatchError, CandidateFile, ConversionOptions, ConversionOutcome,
    ConversionSummary, Decision, FileFailure, SkipReason,
};
pub use encoder::{
    Codec, EncodeJob, EncodeResult, Encoder, EncoderConfig, EncoderError, FfmpegEncoder,
};
