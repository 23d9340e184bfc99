//! Registry of section bodies and live position lookup.
//!
//! Orbiting planets move every frame, so navigation asks for a section's
//! position when it needs it instead of caching one. The registry maps each
//! section to the entity carrying its [`SectionBody`]; that entity's global
//! transform is the source of truth.

use std::collections::HashMap;

use bevy::prelude::*;

use crate::sections::SectionId;

/// Marks the mesh entity that represents a section in the scene.
#[derive(Component, Clone, Debug)]
pub struct SectionBody {
    pub id: SectionId,
    /// Unscaled sphere radius.
    pub size: f32,
}

/// Current world-space bounds of a section body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LiveTarget {
    pub position: Vec3,
    /// Bounding radius including world scale.
    pub radius: f32,
}

/// Anything that can report where a section currently is.
pub trait TargetResolver {
    /// `None` when the section's body is not mounted yet.
    fn resolve(&self, section: SectionId) -> Option<LiveTarget>;
}

/// Resource mapping sections to their body entities.
#[derive(Resource, Default, Debug)]
pub struct SectionAnchors {
    id_to_entity: HashMap<SectionId, Entity>,
}

impl SectionAnchors {
    /// Register `entity` as the body for `id`, replacing any previous one.
    pub fn register(&mut self, id: SectionId, entity: Entity) {
        self.id_to_entity.insert(id, entity);
    }

    /// Forget whichever section `entity` was registered for.
    pub fn unregister_entity(&mut self, entity: Entity) {
        self.id_to_entity.retain(|_, e| *e != entity);
    }

    pub fn entity(&self, id: SectionId) -> Option<Entity> {
        self.id_to_entity.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.id_to_entity.len()
    }

    pub fn is_empty(&self) -> bool {
        self.id_to_entity.is_empty()
    }
}

/// Resolves sections through the anchor registry and a body query.
pub struct AnchorResolver<'a, 'w, 's> {
    anchors: &'a SectionAnchors,
    bodies: &'a Query<'w, 's, (&'static GlobalTransform, &'static SectionBody)>,
}

impl<'a, 'w, 's> AnchorResolver<'a, 'w, 's> {
    pub fn new(
        anchors: &'a SectionAnchors,
        bodies: &'a Query<'w, 's, (&'static GlobalTransform, &'static SectionBody)>,
    ) -> Self {
        Self { anchors, bodies }
    }
}

impl TargetResolver for AnchorResolver<'_, '_, '_> {
    fn resolve(&self, section: SectionId) -> Option<LiveTarget> {
        let entity = self.anchors.entity(section)?;
        let (transform, body) = self.bodies.get(entity).ok()?;
        live_target(transform, body)
    }
}

/// Live bounds of a body from its global transform.
pub fn live_target(transform: &GlobalTransform, body: &SectionBody) -> Option<LiveTarget> {
    let position = transform.translation();
    let scale = transform.compute_transform().scale.max_element();
    let radius = body.size * scale;
    // A body whose transform has not propagated yet sits at NaN or zero scale.
    if !position.is_finite() || !(radius > 0.0) {
        return None;
    }
    Some(LiveTarget { position, radius })
}

/// Drop registry entries for despawned bodies.
pub fn prune_anchors(
    mut anchors: ResMut<SectionAnchors>,
    mut removed: RemovedComponents<SectionBody>,
) {
    for entity in removed.read() {
        anchors.unregister_entity(entity);
    }
}
