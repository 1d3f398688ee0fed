//! In-memory profile store.
//!
//! Holds the saved profiles, the wizard draft and the edit-mode marker.
//! Every operation is total: failed preconditions are silent no-ops, reported
//! only through the return value and a debug log line.

use super::types::{Draft, DraftPatch, Profile, ProfileId, ProfileStats};

/// Single source of truth for profile data and the wizard's draft session.
///
/// Owned by the application root and lent to views by reference.
#[derive(Debug, Default, Clone)]
pub struct ProfileStore {
    /// Saved profiles in insertion order
    profiles: Vec<Profile>,
    /// Record currently being composed or edited
    draft: Draft,
    /// Profile the draft will overwrite on update (edit mode)
    editing_id: Option<ProfileId>,
}

impl ProfileStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with existing profiles.
    pub fn from_profiles(profiles: Vec<Profile>) -> Self {
        Self {
            profiles,
            ..Self::default()
        }
    }

    // ── Reads ───────────────────────────────────────────────────────────

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn editing_id(&self) -> Option<&ProfileId> {
        self.editing_id.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    pub fn get_profile(&self, id: &ProfileId) -> Option<&Profile> {
        self.profiles.iter().find(|p| &p.id == id)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn stats(&self) -> ProfileStats {
        ProfileStats::from_profiles(&self.profiles)
    }

    // ── Draft lifecycle ─────────────────────────────────────────────────

    /// Merge a partial draft into the current one.
    pub fn set_draft_field(&mut self, patch: DraftPatch) {
        self.draft.apply(patch);
    }

    /// Clear the draft and leave edit mode.
    pub fn reset_draft(&mut self) {
        self.draft = Draft::default();
        self.editing_id = None;
    }

    /// Append a new profile built from the draft.
    ///
    /// Requires non-empty `full_name` and `email`; otherwise nothing changes
    /// and `None` is returned.
    pub fn create_profile(&mut self) -> Option<ProfileId> {
        if !self.draft.has_required_fields() {
            log::debug!("create_profile skipped: draft is missing name or email");
            return None;
        }

        let id = ProfileId::generate();
        let draft = std::mem::take(&mut self.draft);
        self.profiles.push(draft.into_profile(id.clone()));
        self.editing_id = None;

        log::info!("Profile created: id={id}, total={}", self.profiles.len());
        Some(id)
    }

    /// Copy a saved profile into the draft and enter edit mode.
    ///
    /// Returns `false` (state unchanged) when no profile has this id.
    pub fn load_profile_for_edit(&mut self, id: &ProfileId) -> bool {
        let Some(draft) = self.get_profile(id).map(Profile::to_draft) else {
            log::debug!("load_profile_for_edit skipped: no profile {id}");
            return false;
        };

        self.draft = draft;
        self.editing_id = Some(id.clone());
        log::debug!("Editing profile {id}");
        true
    }

    /// Write the draft over the profile being edited.
    ///
    /// Outside edit mode this is a no-op. In edit mode the draft and marker
    /// are always cleared, even when the target profile no longer exists.
    /// Returns the id of the profile actually replaced.
    pub fn update_profile(&mut self) -> Option<ProfileId> {
        let Some(editing_id) = self.editing_id.take() else {
            log::debug!("update_profile skipped: not in edit mode");
            return None;
        };

        let draft = std::mem::take(&mut self.draft);
        match self.profiles.iter_mut().find(|p| p.id == editing_id) {
            Some(profile) => {
                profile.overwrite_from(draft);
                log::info!("Profile updated: id={editing_id}");
                Some(editing_id)
            }
            None => {
                log::debug!("update_profile: profile {editing_id} no longer exists");
                None
            }
        }
    }

    /// Remove a profile. Unknown ids are ignored.
    ///
    /// Deleting the profile under edit also ends the edit session so no
    /// dangling `editing_id` survives.
    pub fn delete_profile(&mut self, id: &ProfileId) -> Option<Profile> {
        let index = self.profiles.iter().position(|p| &p.id == id)?;
        let removed = self.profiles.remove(index);

        if self.editing_id.as_ref() == Some(id) {
            log::debug!("Deleted profile {id} was being edited; resetting draft");
            self.reset_draft();
        }

        log::info!("Profile deleted: id={id}, total={}", self.profiles.len());
        Some(removed)
    }
}
