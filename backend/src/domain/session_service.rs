use anyhow::{anyhow, Context};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{info, warn};

use crate::domain::commands::member::AddMemberCommand;
use crate::domain::commands::session::{LoginCommand, RegisterCommand};
use crate::domain::member_store::FamilyMemberStore;
use crate::domain::models::family_member::FamilyMember;
use crate::domain::models::session::Session;
use crate::domain::models::user::User;
use crate::error::{FamilyTreeError, Result};
use crate::storage::traits::UserStorage;

/// Service owning the single active session.
///
/// Registration, login, logout and every session-scoped mutation run while
/// holding the session lock, so they never interleave.
#[derive(Clone)]
pub struct SessionService {
    users: Arc<dyn UserStorage>,
    member_store: FamilyMemberStore,
    active: Arc<Mutex<Option<Session>>>,
}

impl SessionService {
    pub fn new(users: Arc<dyn UserStorage>, member_store: FamilyMemberStore) -> Self {
        Self {
            users,
            member_store,
            active: Arc::new(Mutex::new(None)),
        }
    }

    /// Create an account and sign it in
    pub fn register(&self, command: RegisterCommand) -> Result<User> {
        info!("Registering user: name={}, email={}", command.name, command.email);

        Self::validate_register_command(&command)?;

        let mut active = self.lock_active()?;

        if self.users.find_user_by_email(&command.email)?.is_some() {
            warn!("Registration rejected, email already in use: {}", command.email);
            return Err(FamilyTreeError::DuplicateEmail(command.email));
        }

        let user = User {
            id: self.users.max_user_id()?.map_or(1, |max| max + 1),
            email: command.email,
            password: command.password,
            name: command.name,
        };
        self.users.store_user(&user).context("Failed to store user")?;

        let members = self.member_store.load_for_user(user.id)?;
        *active = Some(Session::new(user.clone(), members));

        info!("Registered user: {} with ID: {}", user.email, user.id);
        Ok(user)
    }

    /// Sign in with an exact email and password match
    pub fn login(&self, command: LoginCommand) -> Result<User> {
        info!("Login attempt: email={}", command.email);

        let mut active = self.lock_active()?;

        let user = self
            .users
            .find_user_by_email(&command.email)?
            .filter(|u| u.matches_credentials(&command.email, &command.password))
            .ok_or_else(|| {
                warn!("Invalid credentials for email: {}", command.email);
                FamilyTreeError::InvalidCredentials
            })?;

        let members = self.member_store.load_for_user(user.id)?;
        *active = Some(Session::new(user.clone(), members));

        info!("User {} signed in", user.id);
        Ok(user)
    }

    /// Drop the active session along with its loaded members
    pub fn logout(&self) -> Result<()> {
        let mut active = self.lock_active()?;
        match active.take() {
            Some(session) => info!("User {} signed out", session.user_id()),
            None => info!("Logout requested with no active session"),
        }
        Ok(())
    }

    /// Snapshot of the active session, if any
    pub fn current_session(&self) -> Result<Option<Session>> {
        Ok(self.lock_active()?.clone())
    }

    /// Snapshot of the active session, failing with `NotAuthenticated` when
    /// nobody is signed in
    pub fn require_session(&self) -> Result<Session> {
        self.current_session()?.ok_or(FamilyTreeError::NotAuthenticated)
    }

    /// Run `f` against the active session, failing with `NotAuthenticated`
    /// when nobody is signed in
    pub fn with_session<R>(&self, f: impl FnOnce(&mut Session) -> Result<R>) -> Result<R> {
        let mut active = self.lock_active()?;
        let session = active.as_mut().ok_or(FamilyTreeError::NotAuthenticated)?;
        f(session)
    }

    /// Add a member to the signed-in user's tree
    pub fn add_member(&self, command: AddMemberCommand) -> Result<FamilyMember> {
        self.with_session(|session| self.member_store.add(session, command))
    }

    fn lock_active(&self) -> Result<MutexGuard<'_, Option<Session>>> {
        self.active
            .lock()
            .map_err(|_| FamilyTreeError::Internal(anyhow!("Session lock poisoned")))
    }

    fn validate_register_command(command: &RegisterCommand) -> Result<()> {
        if command.name.trim().is_empty() {
            return Err(FamilyTreeError::MissingField("name"));
        }
        if command.email.trim().is_empty() {
            return Err(FamilyTreeError::MissingField("email"));
        }
        if command.password.is_empty() {
            return Err(FamilyTreeError::MissingField("password"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::seed::{DEMO_EMAIL, DEMO_PASSWORD};
    use crate::storage::InMemoryConnection;

    fn setup_test() -> SessionService {
        let conn = Arc::new(InMemoryConnection::with_seed_data().unwrap());
        SessionService::new(conn.clone(), FamilyMemberStore::new(conn))
    }

    fn register(name: &str, email: &str, password: &str) -> RegisterCommand {
        RegisterCommand {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    fn login(email: &str, password: &str) -> LoginCommand {
        LoginCommand {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    fn add(full_name: &str, date_of_birth: &str, generation: u32) -> AddMemberCommand {
        AddMemberCommand {
            full_name: full_name.to_string(),
            date_of_birth: date_of_birth.to_string(),
            generation,
            ..Default::default()
        }
    }

    #[test]
    fn test_register_sets_active_session() {
        let service = setup_test();

        let user = service.register(register("Alice", "alice@family.com", "pw")).unwrap();
        assert_eq!(user.id, 2);

        let session = service.current_session().unwrap().unwrap();
        assert_eq!(session.user, user);
        assert!(session.members.is_empty());
    }

    #[test]
    fn test_register_duplicate_email() {
        let service = setup_test();

        let first = service.register(register("Demo", "demo2@family.com", "demo123"));
        assert!(first.is_ok());

        let second = service.register(register("Demo", "demo2@family.com", "demo123"));
        assert!(matches!(second, Err(FamilyTreeError::DuplicateEmail(ref e)) if e == "demo2@family.com"));
    }

    #[test]
    fn test_register_seed_email_is_duplicate() {
        let service = setup_test();
        let result = service.register(register("Demo", DEMO_EMAIL, DEMO_PASSWORD));
        assert!(matches!(result, Err(FamilyTreeError::DuplicateEmail(_))));
        assert!(service.current_session().unwrap().is_none());
    }

    #[test]
    fn test_register_email_match_is_case_sensitive() {
        let service = setup_test();
        assert!(service.register(register("Demo", "Demo@family.com", "pw")).is_ok());
    }

    #[test]
    fn test_register_missing_fields() {
        let service = setup_test();

        assert!(matches!(
            service.register(register("", "a@b.com", "pw")),
            Err(FamilyTreeError::MissingField("name"))
        ));
        assert!(matches!(
            service.register(register("Alice", "", "pw")),
            Err(FamilyTreeError::MissingField("email"))
        ));
        assert!(matches!(
            service.register(register("Alice", "a@b.com", "")),
            Err(FamilyTreeError::MissingField("password"))
        ));
        assert!(service.current_session().unwrap().is_none());
    }

    #[test]
    fn test_login_with_seed_data() {
        let service = setup_test();

        let user = service.login(login(DEMO_EMAIL, DEMO_PASSWORD)).unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.name, "Demo User");

        let session = service.current_session().unwrap().unwrap();
        let generation_zero: Vec<&str> = session
            .members
            .iter()
            .filter(|m| m.generation == 0)
            .map(|m| m.full_name.as_str())
            .collect();
        assert_eq!(generation_zero, vec!["John Smith", "Mary Smith"]);
        assert_eq!(session.members.len(), 3);
    }

    #[test]
    fn test_login_invalid_credentials() {
        let service = setup_test();

        assert!(matches!(
            service.login(login(DEMO_EMAIL, "wrong")),
            Err(FamilyTreeError::InvalidCredentials)
        ));
        assert!(matches!(
            service.login(login("nobody@family.com", DEMO_PASSWORD)),
            Err(FamilyTreeError::InvalidCredentials)
        ));
        assert!(service.current_session().unwrap().is_none());
    }

    #[test]
    fn test_logout_clears_session() {
        let service = setup_test();
        service.login(login(DEMO_EMAIL, DEMO_PASSWORD)).unwrap();

        service.logout().unwrap();
        assert!(service.current_session().unwrap().is_none());

        // Logging out twice is harmless
        service.logout().unwrap();
    }

    #[test]
    fn test_require_session() {
        let service = setup_test();
        assert!(matches!(service.require_session(), Err(FamilyTreeError::NotAuthenticated)));

        service.login(login(DEMO_EMAIL, DEMO_PASSWORD)).unwrap();
        let session = service.require_session().unwrap();
        assert_eq!(session.user_id(), 1);
        assert_eq!(session.members.len(), 3);

        service.logout().unwrap();
        assert!(matches!(service.require_session(), Err(FamilyTreeError::NotAuthenticated)));
    }

    #[test]
    fn test_add_member_requires_session() {
        let service = setup_test();
        let result = service.add_member(add("Emma Smith", "2001-07-04", 2));
        assert!(matches!(result, Err(FamilyTreeError::NotAuthenticated)));
    }

    #[test]
    fn test_added_members_survive_relogin() {
        let service = setup_test();
        service.login(login(DEMO_EMAIL, DEMO_PASSWORD)).unwrap();

        let added = service.add_member(add("Emma Smith", "2001-07-04", 2)).unwrap();
        let session = service.current_session().unwrap().unwrap();
        assert_eq!(session.members.last(), Some(&added));

        service.logout().unwrap();
        service.login(login(DEMO_EMAIL, DEMO_PASSWORD)).unwrap();

        let session = service.current_session().unwrap().unwrap();
        assert_eq!(session.members.len(), 4);
        assert_eq!(session.members.last().map(|m| m.id), Some(added.id));
    }

    #[test]
    fn test_add_member_without_date_leaves_store_unchanged() {
        let service = setup_test();
        service.login(login(DEMO_EMAIL, DEMO_PASSWORD)).unwrap();

        let result = service.add_member(add("Emma Smith", "", 2));
        assert!(matches!(result, Err(FamilyTreeError::MissingField("date_of_birth"))));

        let session = service.current_session().unwrap().unwrap();
        assert_eq!(session.members.len(), 3);
    }

    #[test]
    fn test_sessions_do_not_see_other_users_members() {
        let service = setup_test();
        service.register(register("Alice", "alice@family.com", "pw")).unwrap();
        service.add_member(add("Alice Junior", "2015-01-01", 1)).unwrap();

        service.login(login(DEMO_EMAIL, DEMO_PASSWORD)).unwrap();
        let session = service.current_session().unwrap().unwrap();
        assert!(session.members.iter().all(|m| m.owner_user_id == 1));
        assert!(!session.members.iter().any(|m| m.full_name == "Alice Junior"));
    }
}
