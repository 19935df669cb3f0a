//! Fixed identifiers for the library tree this tool operates on.

/// Folder name that identifies the Edge Impulse inferencing library.
pub const LIBRARY_KEY: &str = "varoa_mite_detection_inferencing";

/// Needle for the `micro` scope: the TFLM micro directory inside the library.
pub const MICRO_NEEDLE: &str =
    "varoa_mite_detection_inferencing/src/edge-impulse-sdk/tensorflow/lite/micro/";

/// Needle for the `tflm` scope. Currently identical to [`MICRO_NEEDLE`];
/// kept separate so the two scopes can diverge.
pub const TFLM_NEEDLE: &str =
    "varoa_mite_detection_inferencing/src/edge-impulse-sdk/tensorflow/lite/micro/";

/// Scope used when `--scope` is not given.
pub const DEFAULT_SCOPE: &str = "micro";

/// Suffix appended to a `.cpp` file name to disable it.
pub const DISABLED_SUFFIX: &str = ".disabled";
