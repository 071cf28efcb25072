use discdump_core::{Dump, System};

/// All systems and dumps loaded from a catalog directory.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub systems: Vec<System>,
    pub dumps: Vec<Dump>,
}

impl Catalog {
    /// Look up a dump by id.
    pub fn find(&self, id: &str) -> Option<&Dump> {
        self.dumps.iter().find(|d| d.id == id)
    }

    /// Look up a system by id.
    pub fn system(&self, id: &str) -> Option<&System> {
        self.systems.iter().find(|s| s.id == id)
    }

    /// Dumps attached to the given system, in load order.
    pub fn dumps_for_system<'a>(&'a self, system_id: &'a str) -> impl Iterator<Item = &'a Dump> {
        self.dumps
            .iter()
            .filter(move |d| d.system.as_ref().is_some_and(|s| s.id == system_id))
    }
}
