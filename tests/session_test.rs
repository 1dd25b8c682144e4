#[cfg(test)]
mod tests {
    use portal_client::models::{Role, User};
    use portal_client::session::{
        FileStorage, MemoryStorage, Session, SessionState, SessionStorage, TOKEN_KEY, USER_KEY,
    };

    #[test]
    fn test_session_starts_resolving() {
        let session = Session::new(MemoryStorage::new());
        assert_eq!(*session.state(), SessionState::Resolving);
        assert!(!session.is_authenticated());
        assert!(session.current_user().is_none());
    }

    #[test]
    fn test_init_with_empty_storage_is_anonymous() {
        let mut session = Session::new(MemoryStorage::new());
        session.init().unwrap();
        assert_eq!(*session.state(), SessionState::Anonymous);
    }

    #[test]
    fn test_login_persists_and_logout_clears() {
        let mut storage = MemoryStorage::new();
        storage.store("unrelated", "kept").unwrap();

        let mut session = Session::new(storage);
        session.init().unwrap();

        let user = User::new(1, "Dr. Smith", Role::Doctor);
        session.login(user.clone(), "token-123").unwrap();

        assert!(session.is_authenticated());
        assert_eq!(session.role(), Some(Role::Doctor));
        assert_eq!(session.token(), Some("token-123"));

        session.logout().unwrap();
        assert_eq!(*session.state(), SessionState::Anonymous);
        assert!(session.token().is_none());
    }

    #[test]
    fn test_session_round_trips_through_storage() {
        let mut storage = MemoryStorage::new();
        {
            let mut session = Session::new(&mut storage);
            session.init().unwrap();
            session
                .login(User::new(2, "Maria", Role::Patient), "bearer-xyz")
                .unwrap();
        }

        let mut session = Session::new(&mut storage);
        session.init().unwrap();

        let user = session.current_user().unwrap();
        assert_eq!(user.name, "Maria");
        assert_eq!(user.role, Role::Patient);
        assert_eq!(session.token(), Some("bearer-xyz"));
    }

    #[test]
    fn test_unreadable_stored_user_resolves_anonymous() {
        let mut storage = MemoryStorage::new();
        storage.store(USER_KEY, "{not json").unwrap();
        storage.store(TOKEN_KEY, "orphan-token").unwrap();

        let mut session = Session::new(storage);
        session.init().unwrap();

        assert_eq!(*session.state(), SessionState::Anonymous);
    }

    #[test]
    fn test_teardown_forgets_in_memory_state_only() {
        let mut storage = MemoryStorage::new();
        let mut session = Session::new(&mut storage);
        session.init().unwrap();
        session
            .login(User::new(3, "Admin", Role::Admin), "tok")
            .unwrap();

        session.teardown();
        assert_eq!(*session.state(), SessionState::Resolving);
        assert!(session.token().is_none());

        // Storage still holds the user; the next init resolves it again.
        session.init().unwrap();
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_file_storage_round_trip() {
        let path = std::env::temp_dir().join(format!("portal-session-{}.json", std::process::id()));
        let _ = std::fs::remove_file(&path);

        let mut storage = FileStorage::new(&path);
        assert!(storage.load(USER_KEY).unwrap().is_none());

        storage.store(USER_KEY, "{\"user_id\":1}").unwrap();
        storage.store(TOKEN_KEY, "tok").unwrap();
        assert_eq!(
            storage.load(USER_KEY).unwrap().as_deref(),
            Some("{\"user_id\":1}")
        );

        storage.remove(TOKEN_KEY).unwrap();
        assert!(storage.load(TOKEN_KEY).unwrap().is_none());

        std::fs::remove_file(&path).unwrap();
    }
}
