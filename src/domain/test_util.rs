use anyhow::anyhow;

/// Whether a fake driven port should behave as if its backing store is reachable
pub enum Connectivity {
    Connected,
    Disconnected,
}

impl Connectivity {
    /// Fails the way a real adapter would when the store can't be reached
    pub fn blow_up_if_disconnected(&self) -> Result<(), anyhow::Error> {
        match self {
            Self::Connected => Ok(()),
            Self::Disconnected => Err(anyhow!("could not connect to the todo store")),
        }
    }
}

/// Records the arguments of every call to a faked function and hands back a canned value.
/// Lets mock port implementations be written by hand without a mocking framework, which
/// doesn't cope well with `impl Trait` arguments on async trait methods.
///
/// * `Args` is whatever a single call should capture
/// * `Ret` is the faked function's return type
pub struct FakeImplementation<Args, Ret> {
    calls: Vec<Args>,
    canned: Option<Ret>,
}

impl<Args, Ret> FakeImplementation<Args, Ret> {
    pub fn new() -> FakeImplementation<Args, Ret> {
        FakeImplementation {
            calls: Vec::new(),
            canned: None,
        }
    }

    pub fn save_arguments(&mut self, arguments: Args) {
        self.calls.push(arguments)
    }

    /// Arguments from every call so far, oldest first
    pub fn calls(&self) -> &[Args] {
        self.calls.as_slice()
    }
}

impl<Args, Success, Fail> FakeImplementation<Args, Result<Success, Fail>>
where
    Success: Clone,
    Fail: Clone,
{
    pub fn set_returned_result(&mut self, result: Result<Success, Fail>) {
        self.canned = Some(result)
    }

    pub fn return_value_result(&self) -> Result<Success, Fail> {
        match self.canned {
            Some(ref result) => result.clone(),
            None => panic!("Faked function was called before its result was set!"),
        }
    }
}
