//! Headless rendering surface.
//!
//! Stands in for the web view on machines without one. It keeps a log of every
//! request so tests can assert exactly which navigations and clicks the core
//! issued.

use super::{RenderingSurface, SurfaceSize};
use crate::error::SurfaceError;
use tracing::debug;

/// A request recorded by [`HeadlessSurface`]
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceRequest {
    Load(String),
    Click { x: f32, y: f32 },
}

#[derive(Debug, Clone)]
pub struct HeadlessSurface {
    size: SurfaceSize,
    ready: bool,
    requests: Vec<SurfaceRequest>,
}

impl HeadlessSurface {
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            size,
            ready: true,
            requests: Vec::new(),
        }
    }

    /// A surface that rejects requests until [`set_ready`](Self::set_ready) is called
    pub fn not_ready(size: SurfaceSize) -> Self {
        Self {
            ready: false,
            ..Self::new(size)
        }
    }

    pub fn set_ready(&mut self, ready: bool) {
        self.ready = ready;
    }

    /// Simulate a rotation or window resize
    pub fn resize(&mut self, size: SurfaceSize) {
        self.size = size;
    }

    pub fn requests(&self) -> &[SurfaceRequest] {
        &self.requests
    }

    /// Clicks issued so far, in order
    pub fn clicks(&self) -> Vec<(f32, f32)> {
        self.requests
            .iter()
            .filter_map(|r| match r {
                SurfaceRequest::Click { x, y } => Some((*x, *y)),
                _ => None,
            })
            .collect()
    }

    /// Most recent navigation, if any
    pub fn last_load(&self) -> Option<&str> {
        self.requests.iter().rev().find_map(|r| match r {
            SurfaceRequest::Load(address) => Some(address.as_str()),
            _ => None,
        })
    }
}

impl Default for HeadlessSurface {
    fn default() -> Self {
        Self::new(SurfaceSize::default())
    }
}

impl RenderingSurface for HeadlessSurface {
    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn is_ready(&self) -> bool {
        self.ready
    }

    fn load_address(&mut self, address: &str) -> Result<(), SurfaceError> {
        if !self.ready {
            return Err(SurfaceError::NotReady);
        }
        debug!("headless load: {}", address);
        self.requests.push(SurfaceRequest::Load(address.to_string()));
        Ok(())
    }

    fn synthesize_click(&mut self, content_x: f32, content_y: f32) -> Result<(), SurfaceError> {
        if !self.ready {
            return Err(SurfaceError::NotReady);
        }
        debug!("headless click at ({}, {})", content_x, content_y);
        self.requests.push(SurfaceRequest::Click {
            x: content_x,
            y: content_y,
        });
        Ok(())
    }
}
