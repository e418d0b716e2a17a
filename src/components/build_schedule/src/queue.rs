use arena::{Arena, Idx, new_id};
use ast::DeclId;
use indexmap::IndexMap;
use shader_model::StageKind;

new_id!(WorkKey, u32);

pub type WorkItemId = Idx<WorkKey, WorkItem>;

/// One discovered-but-not-yet-emitted declaration. Fixed at discovery time;
/// never mutated afterward.
#[derive(Copy, Clone, Debug)]
pub struct WorkItem {
    pub decl: DeclId,
    pub stage: StageKind,
    pub is_entry: bool,
}

/// The reachability worklist: a FIFO queue of [`WorkItem`]s and a dedup
/// record table keyed by declaration identity.
///
/// Work items are only ever appended, so registration order is queue order.
/// Draining is cursor-based, which lets handlers register newly discovered
/// callees while the drain is in progress.
#[derive(Debug, Default)]
pub struct Schedule {
    items: Arena<WorkKey, WorkItem>,
    by_decl: IndexMap<DeclId, WorkItemId>,
    queue: Vec<WorkItemId>,
    cursor: usize,
}

impl Schedule {
    pub fn new() -> Self {
        Self {
            items: Arena::new(),
            by_decl: IndexMap::new(),
            queue: Vec::new(),
            cursor: 0,
        }
    }

    /// Records a declaration for emission, unless it was already recorded.
    ///
    /// Returns `true` if the declaration was newly added to the queue. A
    /// repeat registration is a no-op: it never overwrites the stored stage
    /// or entry flag and never adds a duplicate queue entry, so each
    /// reachable declaration is emitted exactly once no matter how many
    /// call sites discover it.
    pub fn register(&mut self, decl: DeclId, stage: StageKind, is_entry: bool) -> bool {
        assert!(
            !is_entry || stage != StageKind::Invalid,
            "entry points must carry a resolved stage kind",
        );

        if self.by_decl.contains_key(&decl) {
            return false;
        }

        let id = self.items.alloc(WorkItem {
            decl,
            stage,
            is_entry,
        });

        let previous = self.by_decl.insert(decl, id);
        debug_assert!(previous.is_none());

        self.queue.push(id);
        true
    }

    /// Whether a declaration already has a work item.
    ///
    /// `register` is idempotent anyway; this just lets callee discovery
    /// skip building registration arguments for nothing.
    pub fn is_scheduled(&self, decl: DeclId) -> bool {
        self.by_decl.contains_key(&decl)
    }

    pub fn get(&self, decl: DeclId) -> Option<&WorkItem> {
        self.by_decl.get(&decl).map(|id| &self.items[*id])
    }

    pub fn item(&self, id: WorkItemId) -> &WorkItem {
        &self.items[id]
    }

    /// Pops the next work item off the queue, in FIFO order.
    pub fn advance(&mut self) -> Option<WorkItemId> {
        let id = self.queue.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(id)
    }

    /// All work items in registration order, including already-drained ones.
    pub fn items(&self) -> impl Iterator<Item = &WorkItem> {
        self.items.iter().map(|(_, item)| item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ast::{Decl, DeclKind, FuncAttrs, FuncDecl, TranslationUnit};
    use itertools::Itertools;
    use source_files::Source;

    fn unit_with_funcs(names: &[&str]) -> (TranslationUnit, Vec<DeclId>) {
        let mut unit = TranslationUnit::new();

        let ids = names
            .iter()
            .map(|name| {
                unit.add_top_level(Decl::new(
                    DeclKind::Func(FuncDecl {
                        name: name.to_string(),
                        attrs: FuncAttrs::default(),
                        is_definition: true,
                    }),
                    Source::internal(),
                ))
            })
            .collect_vec();

        (unit, ids)
    }

    #[test]
    fn register_is_idempotent() {
        let (_unit, ids) = unit_with_funcs(&["f"]);
        let mut schedule = Schedule::new();

        assert!(schedule.register(ids[0], StageKind::Compute, true));
        assert!(!schedule.register(ids[0], StageKind::Compute, true));
        assert_eq!(schedule.len(), 1);
    }

    #[test]
    fn repeat_registration_never_overwrites() {
        let (_unit, ids) = unit_with_funcs(&["f"]);
        let mut schedule = Schedule::new();

        schedule.register(ids[0], StageKind::Vertex, true);
        schedule.register(ids[0], StageKind::Pixel, false);

        let item = schedule.get(ids[0]).unwrap();
        assert_eq!(item.stage, StageKind::Vertex);
        assert!(item.is_entry);
    }

    #[test]
    fn drain_order_is_registration_order() {
        let (_unit, ids) = unit_with_funcs(&["a", "b", "c"]);
        let mut schedule = Schedule::new();

        for id in ids.iter().copied() {
            schedule.register(id, StageKind::Library, false);
        }

        let mut drained = Vec::new();
        while let Some(id) = schedule.advance() {
            drained.push(schedule.item(id).decl);
        }

        assert_eq!(drained, ids);
    }

    #[test]
    fn is_scheduled_flips_on_registration() {
        let (_unit, ids) = unit_with_funcs(&["f"]);
        let mut schedule = Schedule::new();

        assert!(!schedule.is_scheduled(ids[0]));
        schedule.register(ids[0], StageKind::Compute, true);
        assert!(schedule.is_scheduled(ids[0]));
    }

    #[test]
    fn registering_mid_drain_extends_the_queue() {
        let (_unit, ids) = unit_with_funcs(&["entry", "callee"]);
        let mut schedule = Schedule::new();

        schedule.register(ids[0], StageKind::Compute, true);

        let mut drained = Vec::new();
        while let Some(id) = schedule.advance() {
            let decl = schedule.item(id).decl;
            drained.push(decl);

            // Discovering a callee while emitting its caller.
            if decl == ids[0] {
                schedule.register(ids[1], StageKind::Compute, false);
            }
        }

        assert_eq!(drained, ids);
    }

    #[test]
    #[should_panic]
    fn entry_point_with_invalid_stage_is_a_bug() {
        let (_unit, ids) = unit_with_funcs(&["f"]);
        let mut schedule = Schedule::new();
        schedule.register(ids[0], StageKind::Invalid, true);
    }
}
