//! Model Context Protocol (MCP) server for the Computer Vision API.
//!
//! Each Computer Vision operation is exposed as one MCP tool. A tool checks
//! its arguments, makes one request to the service, and returns the result
//! as JSON. Errors reported by the service reach the caller unchanged.
//!
//! # Usage
//!
//! ```no_run
//! use iris_client::{ComputerVisionClient, VisionConfig};
//! use iris_mcp::{ByteTransport, IrisRouter, RouterService, Server, ToolRegistry};
//! use tokio::io::{stdin, stdout};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = VisionConfig::load()?;
//!     let client = ComputerVisionClient::new(&config)?;
//!
//!     let router = IrisRouter::builder()
//!         .name("iris")
//!         .version(env!("CARGO_PKG_VERSION"))
//!         .tools(ToolRegistry::vision(client))
//!         .build();
//!
//!     let server = Server::new(RouterService(router));
//!     let transport = ByteTransport::new(stdin(), stdout());
//!     server.run(transport).await?;
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod server;
pub mod tools;

pub use error::{McpError, McpResult};
pub use server::{IrisRouter, IrisRouterBuilder};
pub use tools::{
    AnalyzeImageByDomainTool, AnalyzeImageTool, DescribeImageTool, DetectObjectsTool,
    GetAreaOfInterestTool, ListModelsTool, McpTool, RecognizePrintedTextTool, TagImageTool,
    ToolRegistry,
};

// Re-export key mcp-server types for convenience
pub use mcp_server::router::RouterService;
pub use mcp_server::{ByteTransport, Router, Server};
