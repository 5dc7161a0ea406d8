//! Hosted model access: the Bedrock runtime client and the gateway that
//! drives prompt refinement and image generation.

mod bedrock;
mod gateway;

pub use bedrock::BedrockInvoker;
pub use gateway::{GatewaySettings, InferenceGateway};
