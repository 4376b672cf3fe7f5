use std::cell::RefCell;
use std::rc::Rc;

/// Destination for `print` output. The evaluator never writes to stdout
/// directly, so embedders and tests can capture program output.
pub trait HostApi {
    fn print_line(&self, text: &str);
}

/// Default host: program output goes to stdout.
#[derive(Debug, Default, Clone)]
pub struct Host;

impl HostApi for Host {
    fn print_line(&self, text: &str) {
        println!("{text}");
    }
}

/// Captures printed lines in memory. Clones share the same buffer.
#[derive(Debug, Default, Clone)]
pub struct BufferHost {
    lines: Rc<RefCell<Vec<String>>>,
}

impl BufferHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }
}

impl HostApi for BufferHost {
    fn print_line(&self, text: &str) {
        self.lines.borrow_mut().push(text.to_string());
    }
}
