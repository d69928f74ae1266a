//! Declarative role × role × operation permission table.
//!
//! Every scenario derives its expected allow/deny from here instead of
//! duplicating policy knowledge in test bodies. The table is a pure lookup:
//! no state, no side effects.

use playercheck_model::Role;

/// Operation performed by an actor on a target. For `Create` the target role
/// is the role being created.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl Operation {
    pub const ALL: [Operation; 3] = [Operation::Create, Operation::Update, Operation::Delete];
}

/// Expected policy outcome. `Deny` maps to the backend's
/// authorization-rejection status; validation failures are a separate class
/// and never come from this table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Expected {
    Allow,
    Deny,
}

/// Configurable rows for the self-operation cases the reference fixtures
/// contradict each other on. The defaults follow the dedicated self-operation
/// tests: every role may update itself, no role may delete itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatrixRules {
    pub admin_self_update: Expected,
    pub admin_self_delete: Expected,
}

impl Default for MatrixRules {
    fn default() -> Self {
        Self {
            admin_self_update: Expected::Allow,
            admin_self_delete: Expected::Deny,
        }
    }
}

/// The permission policy as data.
#[derive(Clone, Copy, Debug, Default)]
pub struct AuthorizationMatrix {
    rules: MatrixRules,
}

impl AuthorizationMatrix {
    pub fn new(rules: MatrixRules) -> Self {
        Self { rules }
    }

    /// Expected outcome for `actor` performing `op` on a *distinct* target
    /// entity of role `target`. Total over all role/role/operation triples.
    pub fn expected_outcome(&self, actor: Role, target: Role, op: Operation) -> Expected {
        match op {
            Operation::Create => match (actor, target) {
                // Nobody creates a supervisor, the existing one included.
                (_, Role::Supervisor) => Expected::Deny,
                (Role::Supervisor | Role::Admin, Role::Admin | Role::User) => Expected::Allow,
                (Role::User, _) => Expected::Deny,
            },
            // Update and delete rows are kept separate so they can diverge
            // independently even though they currently agree.
            Operation::Update => match (actor, target) {
                (Role::Supervisor, Role::Admin | Role::User) => Expected::Allow,
                (Role::Admin, Role::User) => Expected::Allow,
                _ => Expected::Deny,
            },
            Operation::Delete => match (actor, target) {
                (Role::Supervisor, Role::Admin | Role::User) => Expected::Allow,
                (Role::Admin, Role::User) => Expected::Allow,
                _ => Expected::Deny,
            },
        }
    }

    /// Expected outcome for `actor` performing `op` on *itself*. For `Create`
    /// "self" degenerates to creating a second entity of the actor's own
    /// role, so the distinct-target row applies.
    pub fn expected_self_outcome(&self, actor: Role, op: Operation) -> Expected {
        match op {
            Operation::Create => self.expected_outcome(actor, actor, op),
            Operation::Update => match actor {
                Role::Admin => self.rules.admin_self_update,
                // Supervisor self-update and user self-update are
                // uncontested in the reference behavior.
                Role::Supervisor | Role::User => Expected::Allow,
            },
            Operation::Delete => match actor {
                Role::Admin => self.rules.admin_self_delete,
                Role::Supervisor | Role::User => Expected::Deny,
            },
        }
    }
}
