use nac_tco::prelude::*;

/// Mock OutputPresenter capturing everything presented
#[derive(Default, Clone)]
pub struct MockOutputPresenter {
    pub outputs: std::sync::Arc<std::sync::Mutex<Vec<String>>>,
}

impl MockOutputPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_output(&self) -> Option<String> {
        self.outputs.lock().unwrap().last().cloned()
    }
}

impl OutputPresenter for MockOutputPresenter {
    fn present(&self, content: &str) -> Result<()> {
        self.outputs.lock().unwrap().push(content.to_string());
        Ok(())
    }
}
