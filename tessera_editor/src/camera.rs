// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! World-space camera and screen mapping.

use kurbo::{Point, Rect, Size, Vec2};
use tessera_map::Viewport;

/// A camera looking at `size` world units around `center`.
///
/// The camera is drawn into a screen rectangle (the map view); mapping between
/// the two scales each axis independently.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Camera {
    /// World point at the middle of the view.
    pub center: Point,
    /// World extent covered by the view.
    pub size: Size,
}

impl Camera {
    /// Camera showing `size` world units with its top-left corner at the world origin.
    pub fn at_origin(size: Size) -> Self {
        Self {
            center: Point::new(size.width / 2.0, size.height / 2.0),
            size,
        }
    }

    /// World rectangle covered by the camera.
    pub fn world_rect(&self) -> Rect {
        Rect::from_center_size(self.center, self.size)
    }

    /// The camera as a grid query viewport.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Map coordinates are stored as f32."
    )]
    pub fn viewport(&self) -> Viewport {
        Viewport::from_center_size(
            self.center.x as f32,
            self.center.y as f32,
            self.size.width as f32,
            self.size.height as f32,
        )
    }

    /// World position under `screen`, for a view drawn into `view`.
    pub fn screen_to_world(&self, screen: Point, view: Rect) -> Point {
        let world = self.world_rect();
        let sx = self.size.width / view.width();
        let sy = self.size.height / view.height();
        Point::new(
            world.x0 + (screen.x - view.x0) * sx,
            world.y0 + (screen.y - view.y0) * sy,
        )
    }

    /// Screen position of `world`, for a view drawn into `view`.
    pub fn world_to_screen(&self, world: Point, view: Rect) -> Point {
        let r = self.world_rect();
        let sx = view.width() / self.size.width;
        let sy = view.height() / self.size.height;
        Point::new(
            view.x0 + (world.x - r.x0) * sx,
            view.y0 + (world.y - r.y0) * sy,
        )
    }

    /// Pan by `delta` world units.
    pub fn pan(&mut self, delta: Vec2) {
        self.center += delta;
    }

    /// Scale the covered extent; factors below one zoom in.
    pub fn zoom(&mut self, factor: f64) {
        if factor > 0.0 {
            self.size = Size::new(self.size.width * factor, self.size.height * factor);
        }
    }
}
