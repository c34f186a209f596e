use super::{Host, Options, Runtime};
use crate::error;
use crate::lang::Error;
use tracing::debug;

type Result<T> = std::result::Result<T, Error>;

/// ## Instance registry
///
/// Owns any number of independent interpreters and remembers which one
/// is current. Instances share nothing.
#[derive(Default)]
pub struct Registry {
    instances: Vec<Runtime>,
    current: usize,
    serial: usize,
}

impl Registry {
    pub fn new() -> Registry {
        Registry::default()
    }

    /// Creates an instance and makes it current. Unnamed instances are
    /// called `pocket1`, `pocket2` and so on.
    pub fn new_instance(&mut self, mut options: Options, host: Box<dyn Host>) -> Result<usize> {
        if options.name.is_none() {
            options.name = Some(format!("pocket{}", self.serial + 1));
        }
        let runtime = Runtime::new(options, host)?;
        self.serial += 1;
        self.instances.push(runtime);
        self.current = self.instances.len() - 1;
        debug!(index = self.current, name = %self.instances[self.current].name(), "instance registered");
        Ok(self.current)
    }

    pub fn set_current(&mut self, index: usize) -> Result<()> {
        if index >= self.instances.len() {
            return Err(error!(NoSuchInstance));
        }
        self.current = index;
        debug!(index, "current instance");
        Ok(())
    }

    pub fn current(&mut self) -> Option<&mut Runtime> {
        self.instances.get_mut(self.current)
    }

    pub fn current_index(&self) -> Option<usize> {
        if self.instances.is_empty() {
            None
        } else {
            Some(self.current)
        }
    }

    pub fn get(&mut self, index: usize) -> Option<&mut Runtime> {
        self.instances.get_mut(index)
    }

    pub fn find(&self, name: &str) -> Option<usize> {
        self.instances.iter().position(|r| r.name() == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.instances.iter().map(|r| r.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Drops an instance. Later indexes shift down by one.
    pub fn destroy(&mut self, index: usize) -> Result<()> {
        if index >= self.instances.len() {
            return Err(error!(NoSuchInstance));
        }
        let runtime = self.instances.remove(index);
        debug!(index, name = %runtime.name(), "instance destroyed");
        if self.current > index || self.current >= self.instances.len() {
            self.current = self.current.saturating_sub(1);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mach::{Stream, StdHost};

    struct Quiet;

    impl Host for Quiet {
        fn print_bytes(&mut self, _stream: Stream, _bytes: &[u8]) {}
    }

    #[test]
    fn test_generated_names() {
        let mut registry = Registry::new();
        registry.new_instance(Options::default(), Box::new(Quiet)).unwrap();
        let named = Options {
            name: Some("calc".to_string()),
            ..Options::default()
        };
        registry.new_instance(named, Box::new(StdHost)).unwrap();
        registry.new_instance(Options::default(), Box::new(Quiet)).unwrap();
        assert_eq!(registry.names(), vec!["pocket1", "calc", "pocket3"]);
        assert_eq!(registry.find("calc"), Some(1));
        assert_eq!(registry.current_index(), Some(2));
    }

    #[test]
    fn test_set_current_bounds() {
        let mut registry = Registry::new();
        assert_eq!(registry.current_index(), None);
        assert!(registry.current().is_none());
        registry.new_instance(Options::default(), Box::new(Quiet)).unwrap();
        assert_eq!(
            registry.set_current(1).map_err(|e| e.kind()),
            Err(crate::lang::ErrorCode::NoSuchInstance)
        );
        assert!(registry.set_current(0).is_ok());
    }

    #[test]
    fn test_destroy_keeps_current_valid() {
        let mut registry = Registry::new();
        for _ in 0..3 {
            registry.new_instance(Options::default(), Box::new(Quiet)).unwrap();
        }
        registry.set_current(1).unwrap();
        registry.destroy(0).unwrap();
        assert_eq!(registry.current_index(), Some(0));
        assert_eq!(registry.current().map(|r| r.name().to_string()), Some("pocket2".to_string()));
        registry.destroy(1).unwrap();
        registry.destroy(0).unwrap();
        assert!(registry.is_empty());
        assert_eq!(registry.current_index(), None);
    }
}
