/// Abstract input accepted by [`super::GameSession::step`].
///
/// Clients translate keys, taps or text lines into these three commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    SelectPrevious,
    SelectNext,
    Confirm,
}
