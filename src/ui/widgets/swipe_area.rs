// SPDX-License-Identifier: MPL-2.0
//! A wrapper widget that reports horizontal touch gestures over its content.
//!
//! Only a finger that goes down inside the widget's bounds is followed; touches
//! that start elsewhere (thumbnails, buttons, the backdrop) are ignored even
//! if they later cross the area. All events still reach the wrapped content.

use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{self, tree, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::touch;
use iced::{Element, Event, Length, Rectangle, Size};

/// Gesture phases reported to the owner, in window coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    Started(f32),
    Moved(f32),
    /// The finger lifted at `Some(x)`, or was lost (`None`).
    Ended(Option<f32>),
}

#[derive(Debug, Default)]
struct State {
    finger: Option<touch::Finger>,
}

pub struct SwipeArea<'a, Message, Theme, Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    on_gesture: Box<dyn Fn(Gesture) -> Message + 'a>,
}

impl<'a, Message, Theme, Renderer> SwipeArea<'a, Message, Theme, Renderer> {
    pub fn new(
        content: impl Into<Element<'a, Message, Theme, Renderer>>,
        on_gesture: impl Fn(Gesture) -> Message + 'a,
    ) -> Self {
        Self {
            content: content.into(),
            on_gesture: Box::new(on_gesture),
        }
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for SwipeArea<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::default())
    }

    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        self.content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, limits)
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
        self.content.as_widget().draw(
            &tree.children[0],
            renderer,
            theme,
            style,
            layout,
            cursor,
            viewport,
        );
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
        self.content.as_widget_mut().update(
            &mut tree.children[0],
            event,
            layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );

        let state = tree.state.downcast_mut::<State>();
        if let Some(gesture) = track(&mut state.finger, event, layout.bounds()) {
            shell.publish((self.on_gesture)(gesture));
        }
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        self.content.as_widget().mouse_interaction(
            &tree.children[0],
            layout,
            cursor,
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
        self.content
            .as_widget_mut()
            .operate(&mut tree.children[0], layout, renderer, operation);
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut widget::Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: iced::Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        self.content.as_widget_mut().overlay(
            &mut tree.children[0],
            layout,
            renderer,
            viewport,
            translation,
        )
    }
}

impl<'a, Message, Theme, Renderer> From<SwipeArea<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(area: SwipeArea<'a, Message, Theme, Renderer>) -> Self {
        Self::new(area)
    }
}

/// Helper function to create a swipe area.
pub fn swipe_area<'a, Message, Theme, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
    on_gesture: impl Fn(Gesture) -> Message + 'a,
) -> SwipeArea<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    SwipeArea::new(content, on_gesture)
}

/// Follows a single finger. Additional fingers are ignored while one is tracked.
fn track(
    tracked: &mut Option<touch::Finger>,
    event: &Event,
    bounds: Rectangle,
) -> Option<Gesture> {
    let Event::Touch(touch_event) = event else {
        return None;
    };

    match (*touch_event, *tracked) {
        (touch::Event::FingerPressed { id, position }, None) if bounds.contains(position) => {
            *tracked = Some(id);
            Some(Gesture::Started(position.x))
        }
        (touch::Event::FingerMoved { id, position }, Some(finger)) if id == finger => {
            Some(Gesture::Moved(position.x))
        }
        (touch::Event::FingerLifted { id, position }, Some(finger)) if id == finger => {
            *tracked = None;
            Some(Gesture::Ended(Some(position.x)))
        }
        (touch::Event::FingerLost { id, .. }, Some(finger)) if id == finger => {
            *tracked = None;
            Some(Gesture::Ended(None))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Point;

    fn bounds() -> Rectangle {
        Rectangle::new(Point::new(100.0, 100.0), Size::new(400.0, 300.0))
    }

    fn pressed(id: u64, x: f32) -> Event {
        Event::Touch(touch::Event::FingerPressed {
            id: touch::Finger(id),
            position: Point::new(x, 200.0),
        })
    }

    fn lifted(id: u64, x: f32) -> Event {
        Event::Touch(touch::Event::FingerLifted {
            id: touch::Finger(id),
            position: Point::new(x, 200.0),
        })
    }

    #[test]
    fn touch_inside_bounds_is_tracked_to_lift() {
        let mut tracked = None;
        assert_eq!(
            track(&mut tracked, &pressed(1, 300.0), bounds()),
            Some(Gesture::Started(300.0))
        );
        let moved = Event::Touch(touch::Event::FingerMoved {
            id: touch::Finger(1),
            position: Point::new(250.0, 200.0),
        });
        assert_eq!(
            track(&mut tracked, &moved, bounds()),
            Some(Gesture::Moved(250.0))
        );
        assert_eq!(
            track(&mut tracked, &lifted(1, 200.0), bounds()),
            Some(Gesture::Ended(Some(200.0)))
        );
        assert!(tracked.is_none());
    }

    #[test]
    fn touch_starting_outside_is_ignored() {
        let mut tracked = None;
        assert_eq!(track(&mut tracked, &pressed(1, 20.0), bounds()), None);
        assert_eq!(track(&mut tracked, &lifted(1, 300.0), bounds()), None);
    }

    #[test]
    fn second_finger_is_ignored() {
        let mut tracked = None;
        track(&mut tracked, &pressed(1, 300.0), bounds());
        assert_eq!(track(&mut tracked, &pressed(2, 350.0), bounds()), None);
        assert_eq!(track(&mut tracked, &lifted(2, 150.0), bounds()), None);
        assert_eq!(tracked, Some(touch::Finger(1)));
    }

    #[test]
    fn lost_finger_ends_without_position() {
        let mut tracked = None;
        track(&mut tracked, &pressed(7, 300.0), bounds());
        let lost = Event::Touch(touch::Event::FingerLost {
            id: touch::Finger(7),
            position: Point::new(0.0, 0.0),
        });
        assert_eq!(track(&mut tracked, &lost, bounds()), Some(Gesture::Ended(None)));
        assert!(tracked.is_none());
    }

    #[test]
    fn mouse_events_are_not_gestures() {
        let mut tracked = None;
        let event = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        assert_eq!(track(&mut tracked, &event, bounds()), None);
    }
}
