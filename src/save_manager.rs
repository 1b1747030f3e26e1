use std::fs;
use std::io;
use std::path::PathBuf;

use directories::ProjectDirs;

use crate::game_state::GameState;

/// Loads, saves, and deletes the persisted game state.
///
/// The save is a single pretty-printed JSON document holding the whole
/// [`GameState`], kept in the platform's config directory via the
/// `directories` crate. A missing file on load means "no prior save" and is
/// not an error; every other I/O failure is surfaced to the caller.
pub struct SaveManager {
    save_path: PathBuf,
}

impl SaveManager {
    /// Creates a SaveManager pointed at the platform save location.
    pub fn new() -> io::Result<Self> {
        let project_dirs = ProjectDirs::from("", "", "fable").ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "Could not determine config directory",
            )
        })?;

        let config_dir = project_dirs.config_dir();
        fs::create_dir_all(config_dir)?;

        Ok(Self {
            save_path: config_dir.join("save.json"),
        })
    }

    /// Creates a SaveManager pointed at an explicit file path. Used by
    /// tests and anything that wants to keep saves elsewhere.
    pub fn with_path(save_path: PathBuf) -> Self {
        Self { save_path }
    }

    /// Reads the save file, returning `None` when no save exists yet.
    pub fn load(&self) -> io::Result<Option<GameState>> {
        let contents = match fs::read_to_string(&self.save_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e),
        };

        let state = serde_json::from_str(&contents)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(Some(state))
    }

    /// Writes the full game state as JSON.
    pub fn save(&self, state: &GameState) -> io::Result<()> {
        let json = serde_json::to_string_pretty(state)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(&self.save_path, json)
    }

    /// Removes the save file. A file that is already gone is fine.
    pub fn delete(&self) -> io::Result<()> {
        match fs::remove_file(&self.save_path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }

    pub fn save_exists(&self) -> bool {
        self.save_path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{Character, Profession};

    fn temp_save(name: &str) -> SaveManager {
        let path = std::env::temp_dir().join(format!("fable-{}-{}.json", name, std::process::id()));
        let manager = SaveManager::with_path(path);
        let _ = manager.delete();
        manager
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let manager = temp_save("round-trip");

        let mut character = Character::new("Conan".to_string(), Profession::Warrior);
        character.gold = 130;
        character.xp = 25;
        character.health = 85;
        character.inventory.add_item("Raw Meat", 2);
        let state = GameState::with_character(character);

        manager.save(&state).expect("save failed");
        assert!(manager.save_exists());

        let loaded = manager.load().expect("load failed").expect("save missing");
        assert_eq!(loaded, state);

        manager.delete().expect("delete failed");
        assert!(!manager.save_exists());
    }

    #[test]
    fn test_load_missing_file_is_no_save() {
        let manager = temp_save("missing");
        assert!(manager.load().expect("load failed").is_none());
    }

    #[test]
    fn test_load_corrupt_file_is_an_error() {
        let manager = temp_save("corrupt");
        fs::write(
            manager.save_path.clone(),
            "this is not json",
        )
        .expect("write failed");

        let err = manager.load().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);

        manager.delete().expect("delete failed");
    }

    #[test]
    fn test_delete_missing_file_is_fine() {
        let manager = temp_save("delete-missing");
        manager.delete().expect("delete should tolerate missing file");
    }
}
