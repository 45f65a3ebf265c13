use crate::draw::UiDrawList;

/// Host renderer that turns a UI draw list into pixels.
///
/// Lists arrive one tick late: the list submitted on tick N was produced by the
/// UI pass of tick N-1.
pub trait UiRenderer: Send {
    fn render(&mut self, list: &UiDrawList);
}
