use crate::constants::{
    ATTEMPTS_KEY, DEFAULT_ATTEMPT_LIMIT, MAX_BLOCKED_ATTEMPTS, RULES_KEY, SESSION_KEY,
};
use crate::error::AppError;
use crate::models::{BlockedAppAttempt, BlockingRule, FocusSession, RuleInput, RuleUpdate};
use crate::store::KeyValueStore;
use crate::validation::{
    duration_exceeds_day, validate_days, validate_duration_minutes, validate_time_format,
};
use chrono::{Local, Utc};
use log::{info, warn};
use serde::Serialize;
use uuid::Uuid;

/// Why an app is (or is not) blocked right now.
///
/// A running focus session always wins over scheduled rules. Among several
/// matching rules the first found is returned; precedence beyond that is
/// deliberately unspecified and callers must not rely on which one they get.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockVerdict {
    Allowed,
    Focus { session: FocusSession },
    Rule { rule: BlockingRule },
}

impl BlockVerdict {
    pub fn is_blocked(&self) -> bool {
        !matches!(self, Self::Allowed)
    }
}

/// Callback invoked synchronously for every recorded blocked attempt.
pub type BlockingListener = Box<dyn Fn(&BlockedAppAttempt)>;

/// Handle returned by `add_blocking_listener`, used to unregister.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerId(u64);

/// Owns the blocking-rule lifecycle and the single active focus session, and
/// answers "is app X blocked right now, and why".
///
/// The engine is single-threaded: mutations take `&mut self` and run to
/// completion with no internal suspension points. Embeddings with concurrent
/// callers should wrap it in `Arc<Mutex<_>>`, since persistence is
/// whole-collection read/modify/write and concurrent writers would clobber
/// each other.
pub struct BlockingEngine<S: KeyValueStore> {
    store: S,
    active_rules: Vec<BlockingRule>,
    active_session: Option<FocusSession>,
    listeners: Vec<(ListenerId, BlockingListener)>,
    next_listener_id: u64,
}

impl<S: KeyValueStore> BlockingEngine<S> {
    /// Construct an engine over the given store. A previously persisted
    /// focus session is restored only if still active and unexpired;
    /// anything else under that key is purged. This load-time check is the
    /// only place session expiry is enforced.
    pub fn new(mut store: S) -> Self {
        let active_session = load_active_session(&mut store);
        let mut engine = Self {
            store,
            active_rules: Vec::new(),
            active_session,
            listeners: Vec::new(),
            next_listener_id: 0,
        };
        engine.recompute_active_rules();
        engine
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the engine, returning its store.
    pub fn into_store(self) -> S {
        self.store
    }

    // Blocking rules

    /// Create a rule with a fresh id and current timestamps. Input is not
    /// rejected: a malformed window or day set is stored as-is and simply
    /// never matches, though it is logged for visibility.
    pub fn create_rule(&mut self, input: RuleInput) -> BlockingRule {
        if let Err(e) = validate_time_format(&input.start_time) {
            warn!("Rule '{}' has an unmatchable start time: {e}", input.name);
        }
        if let Err(e) = validate_time_format(&input.end_time) {
            warn!("Rule '{}' has an unmatchable end time: {e}", input.name);
        }
        if let Err(e) = validate_days(&input.days) {
            warn!("Rule '{}' has an unmatchable day set: {e}", input.name);
        }

        let now = Utc::now();
        let rule = BlockingRule {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            blocked_apps: input.blocked_apps,
            start_time: input.start_time,
            end_time: input.end_time,
            days: input.days,
            is_active: input.is_active,
            color: input.color,
            created_at: now,
            updated_at: now,
        };

        let mut rules = self.all_rules();
        rules.push(rule.clone());
        self.persist(RULES_KEY, &rules);
        self.recompute_active_rules();
        rule
    }

    /// Merge a partial update onto an existing rule and refresh `updated_at`.
    /// Returns `None` when the id is unknown.
    pub fn update_rule(&mut self, id: &str, update: RuleUpdate) -> Option<BlockingRule> {
        let mut rules = self.all_rules();
        let rule = rules.iter_mut().find(|r| r.id == id)?;

        rule.apply(update);
        rule.updated_at = Utc::now();
        let updated = rule.clone();

        self.persist(RULES_KEY, &rules);
        self.recompute_active_rules();
        Some(updated)
    }

    /// Remove a rule. Returns whether anything was removed.
    pub fn delete_rule(&mut self, id: &str) -> bool {
        let rules = self.all_rules();
        let original_len = rules.len();
        let remaining: Vec<BlockingRule> = rules.into_iter().filter(|r| r.id != id).collect();

        if remaining.len() == original_len {
            return false;
        }

        self.persist(RULES_KEY, &remaining);
        self.recompute_active_rules();
        true
    }

    /// Every stored rule. Corrupt storage yields an empty list, never an
    /// error; the parse failure is logged.
    pub fn all_rules(&self) -> Vec<BlockingRule> {
        let Some(json) = self.store.get(RULES_KEY) else {
            return Vec::new();
        };
        match serde_json::from_str(&json) {
            Ok(rules) => rules,
            Err(e) => {
                warn!("Discarding unreadable rule collection: {e}");
                Vec::new()
            }
        }
    }

    /// The cached result of the last activation computation. Callers that
    /// need up-to-the-second accuracy should call `recompute_active_rules`
    /// first (for example on a periodic timer).
    pub fn active_rules(&self) -> &[BlockingRule] {
        &self.active_rules
    }

    /// Recompute which rules match the current local weekday and time,
    /// replacing the cached active set wholesale. Called after every rule
    /// mutation; callers should also invoke it periodically.
    pub fn recompute_active_rules(&mut self) {
        let (day, time) = current_day_and_time();
        self.active_rules = self
            .all_rules()
            .into_iter()
            .filter(|rule| rule.is_active_at(&day, &time))
            .collect();
    }

    // Blocking queries

    /// Whether the given app is blocked right now. A running focus session
    /// is checked first; only then the cached active rules, in order.
    pub fn is_app_blocked(&self, package_name: &str) -> BlockVerdict {
        if let Some(session) = &self.active_session {
            if session.is_running_at(Utc::now()) && session.blocks_app(package_name) {
                return BlockVerdict::Focus {
                    session: session.clone(),
                };
            }
        }

        for rule in &self.active_rules {
            if rule.blocks_app(package_name) {
                return BlockVerdict::Rule { rule: rule.clone() };
            }
        }

        BlockVerdict::Allowed
    }

    // Focus session lifecycle

    /// Start a focus session, replacing any previously persisted record
    /// wholesale. Any positive duration is accepted; only zero is rejected.
    pub fn start_focus_session(
        &mut self,
        duration_minutes: u32,
        blocked_apps: Vec<String>,
    ) -> Result<FocusSession, AppError> {
        validate_duration_minutes(duration_minutes)?;
        if duration_exceeds_day(duration_minutes) {
            warn!("Focus session duration {duration_minutes} min exceeds 24 hours");
        }

        let session = FocusSession::new(duration_minutes, blocked_apps);
        info!("Starting focus session {} ({duration_minutes} min)", session.id);

        self.persist(SESSION_KEY, &session);
        self.active_session = Some(session.clone());
        Ok(session)
    }

    /// End the current focus session permanently. There is no resume: the
    /// final inactive state is persisted and the in-memory reference cleared.
    /// Returns the ended session, or `None` when nothing was running.
    pub fn end_focus_session(&mut self) -> Option<FocusSession> {
        let mut session = self.active_session.take()?;
        session.is_active = false;
        info!("Ending focus session {}", session.id);
        self.persist(SESSION_KEY, &session);
        Some(session)
    }

    /// The in-memory active session, if any. Expiry is only enforced at
    /// construction; pollers observing `end_time` should call
    /// `end_focus_session` themselves.
    pub fn active_focus_session(&self) -> Option<&FocusSession> {
        self.active_session.as_ref()
    }

    // Blocked-attempt log

    /// Append an attempt, trim the log to the most recent 1000 entries, and
    /// notify listeners synchronously in registration order.
    pub fn record_blocked_attempt(
        &mut self,
        package_name: &str,
        app_name: &str,
        rule_id: Option<String>,
        session_id: Option<String>,
    ) {
        let attempt = BlockedAppAttempt::new(package_name, app_name, rule_id, session_id);

        let mut attempts = self.load_attempts();
        attempts.push(attempt.clone());
        if attempts.len() > MAX_BLOCKED_ATTEMPTS {
            let excess = attempts.len() - MAX_BLOCKED_ATTEMPTS;
            attempts.drain(..excess);
        }
        self.persist(ATTEMPTS_KEY, &attempts);

        for (_, listener) in &self.listeners {
            listener(&attempt);
        }
    }

    /// The most recent attempts, newest first, at most `limit` entries.
    /// Corrupt storage yields an empty list.
    pub fn blocked_attempts(&self, limit: usize) -> Vec<BlockedAppAttempt> {
        let mut attempts = self.load_attempts();
        attempts.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        attempts.truncate(limit);
        attempts
    }

    /// The most recent attempts with the default limit of 100.
    pub fn recent_attempts(&self) -> Vec<BlockedAppAttempt> {
        self.blocked_attempts(DEFAULT_ATTEMPT_LIMIT)
    }

    fn load_attempts(&self) -> Vec<BlockedAppAttempt> {
        let Some(json) = self.store.get(ATTEMPTS_KEY) else {
            return Vec::new();
        };
        match serde_json::from_str(&json) {
            Ok(attempts) => attempts,
            Err(e) => {
                warn!("Discarding unreadable attempt log: {e}");
                Vec::new()
            }
        }
    }

    // Listeners

    pub fn add_blocking_listener(&mut self, listener: BlockingListener) -> ListenerId {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, listener));
        id
    }

    /// Unregister a listener by its handle. Returns whether it was present.
    pub fn remove_blocking_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    fn persist<T: Serialize>(&mut self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(json) => self.store.set(key, &json),
            Err(e) => warn!("Failed to serialize '{key}': {e}"),
        }
    }
}

/// Load a persisted session, keeping it only while active and unexpired.
/// Expired or unreadable records are purged from storage.
fn load_active_session<S: KeyValueStore>(store: &mut S) -> Option<FocusSession> {
    let json = store.get(SESSION_KEY)?;
    match serde_json::from_str::<FocusSession>(&json) {
        Ok(session) if session.is_running_at(Utc::now()) => Some(session),
        Ok(_) => {
            store.delete(SESSION_KEY);
            None
        }
        Err(e) => {
            warn!("Discarding unreadable focus session: {e}");
            store.delete(SESSION_KEY);
            None
        }
    }
}

/// Current local weekday label ("Mon".."Sun") and time as HH:mm.
fn current_day_and_time() -> (String, String) {
    let now = Local::now();
    (now.format("%a").to_string(), now.format("%H:%M").to_string())
}
