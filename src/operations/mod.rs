pub mod approximate;

pub use approximate::{
    approximate, ApproximateBezier, ApproximatePath, BiarcParams, DepthLimitFallback,
};
