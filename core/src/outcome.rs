/// Classification of one fetch/execute step.
///
/// The caller drives the run loop and uses the tag to decide what, if
/// anything, to do before the next step: re-present the frame buffer, or
/// simply call again because the machine is waiting on the keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The state advanced with no externally visible side effect.
    Normal,
    /// The frame buffer changed and should be re-presented.
    DisplayDirty,
    /// The keypad was consulted for a skip decision.
    KeyQuery,
    /// The key-wait instruction found no key down; the program counter was
    /// left alone and the caller must invoke the step again.
    KeyWaitBlocked,
}
