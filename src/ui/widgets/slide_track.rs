// SPDX-License-Identifier: MPL-2.0
//! A clipped horizontal track that shows its content shifted by an offset.
//!
//! The content is laid out without a width limit and moved left by the
//! carousel translation. Wheel events are swallowed so the track can only be
//! moved by the carousel itself; the page scrollable still receives them.

use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{self, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{Element, Event, Length, Point, Rectangle, Size};

pub struct SlideTrack<'a, Message, Theme, Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    offset_x: f32,
    height: Length,
}

impl<'a, Message, Theme, Renderer> SlideTrack<'a, Message, Theme, Renderer> {
    /// Creates a track showing `content` translated by `offset_x` (usually
    /// zero or negative).
    pub fn new(content: impl Into<Element<'a, Message, Theme, Renderer>>, offset_x: f32) -> Self {
        Self {
            content: content.into(),
            offset_x,
            height: Length::Shrink,
        }
    }

    #[must_use]
    pub fn height(mut self, height: impl Into<Length>) -> Self {
        self.height = height.into();
        self
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for SlideTrack<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn size(&self) -> Size<Length> {
        Size::new(Length::Fill, self.height)
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let limits = limits.width(Length::Fill).height(self.height);
        let content_limits =
            layout::Limits::new(Size::ZERO, Size::new(f32::INFINITY, limits.max().height));

        let content = self
            .content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, &content_limits)
            .move_to(Point::new(self.offset_x, 0.0));

        let size = limits.resolve(Length::Fill, self.height, content.size());
        layout::Node::with_children(size, vec![content])
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&[&self.content]);
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        let Some(clip) = layout.bounds().intersection(viewport) else {
            return;
        };
        let Some(content_layout) = layout.children().next() else {
            return;
        };

        renderer.with_layer(clip, |renderer| {
            self.content.as_widget().draw(
                &tree.children[0],
                renderer,
                theme,
                style,
                content_layout,
                cursor,
                &clip,
            );
        });
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        if is_wheel_event(event) {
            return;
        }
        let Some(content_layout) = layout.children().next() else {
            return;
        };

        self.content.as_widget_mut().update(
            &mut tree.children[0],
            event,
            content_layout,
            clip_cursor(cursor, layout.bounds()),
            renderer,
            clipboard,
            shell,
            viewport,
        );
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        let Some(content_layout) = layout.children().next() else {
            return mouse::Interaction::default();
        };
        self.content.as_widget().mouse_interaction(
            &tree.children[0],
            content_layout,
            clip_cursor(cursor, layout.bounds()),
            viewport,
            renderer,
        )
    }

    fn operate(
        &mut self,
        tree: &mut widget::Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        if let Some(content_layout) = layout.children().next() {
            self.content.as_widget_mut().operate(
                &mut tree.children[0],
                content_layout,
                renderer,
                operation,
            );
        }
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut widget::Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: iced::Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        let content_layout = layout.children().next()?;
        self.content.as_widget_mut().overlay(
            &mut tree.children[0],
            content_layout,
            renderer,
            viewport,
            translation,
        )
    }
}

impl<'a, Message, Theme, Renderer> From<SlideTrack<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(track: SlideTrack<'a, Message, Theme, Renderer>) -> Self {
        Self::new(track)
    }
}

/// Helper function to create a slide track.
pub fn slide_track<'a, Message, Theme, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
    offset_x: f32,
) -> SlideTrack<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    SlideTrack::new(content, offset_x)
}

/// Hides the cursor from content that lies outside the visible track.
fn clip_cursor(cursor: mouse::Cursor, bounds: Rectangle) -> mouse::Cursor {
    if cursor.is_over(bounds) {
        cursor
    } else {
        mouse::Cursor::Unavailable
    }
}

fn is_wheel_event(event: &Event) -> bool {
    matches!(event, Event::Mouse(mouse::Event::WheelScrolled { .. }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wheel_event_is_detected() {
        let event = Event::Mouse(mouse::Event::WheelScrolled {
            delta: mouse::ScrollDelta::Lines { x: 0.0, y: 1.0 },
        });
        assert!(is_wheel_event(&event));
    }

    #[test]
    fn button_events_pass_through() {
        let event = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        assert!(!is_wheel_event(&event));
    }

    #[test]
    fn cursor_outside_track_is_hidden() {
        let bounds = Rectangle::new(Point::new(0.0, 0.0), Size::new(100.0, 50.0));
        let inside = mouse::Cursor::Available(Point::new(10.0, 10.0));
        let outside = mouse::Cursor::Available(Point::new(150.0, 10.0));

        assert_eq!(clip_cursor(inside, bounds), inside);
        assert_eq!(clip_cursor(outside, bounds), mouse::Cursor::Unavailable);
    }
}
