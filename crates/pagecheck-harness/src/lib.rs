//! In-process test harness for server-rendered pages
//!
//! This crate provides the request/response half of the pagecheck testkit:
//! a [`PageTester`] that drives an axum `Router` without binding a socket,
//! a mock session/request pair for arbitrary resource requests, and a small
//! component/page model for rendering isolated components inside inline
//! markup fixtures.

mod component;
mod error;
mod page;
mod params;
mod request;
mod response;
mod tester;

pub use component::{Component, ComponentId, ComponentIdError, Label, RenderContext};
pub use error::{HarnessError, HarnessResult};
pub use page::Page;
pub use params::PageParameters;
pub use request::{MockRequest, MockSession};
pub use response::LastResponse;
pub use tester::{PageTester, PAGE_MOUNT_PATH};
