use crate::Role;

/// Capability record derived from the principal's roles.
///
/// Consumed by the UI layer to decide what to render and by the order
/// composition flow to decide which operations are even attempted. The
/// backend re-checks everything; this gating is cosmetic-plus-ergonomic,
/// never a security boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    pub can_manage_catalog: bool,
    pub can_view_all_orders: bool,
    pub can_place_order: bool,
}

impl Capabilities {
    /// No capabilities at all (unauthenticated, or no recognized role).
    pub const NONE: Capabilities = Capabilities {
        can_manage_catalog: false,
        can_view_all_orders: false,
        can_place_order: false,
    };

    /// Pure mapping from granted roles to capabilities.
    ///
    /// ADMIN and CLIENT are mutually exclusive in the intended account
    /// setup, but each role is evaluated independently: an account holding
    /// both receives the union of capabilities. No roles means no
    /// capabilities.
    ///
    /// - No IO
    /// - No panics
    pub fn for_roles(roles: &[Role]) -> Self {
        let admin = roles.contains(&Role::ADMIN);
        let client = roles.contains(&Role::CLIENT);

        Self {
            can_manage_catalog: admin,
            can_view_all_orders: admin,
            can_place_order: client,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_manages_catalog_and_sees_all_orders_but_cannot_order() {
        let caps = Capabilities::for_roles(&[Role::ADMIN]);
        assert!(caps.can_manage_catalog);
        assert!(caps.can_view_all_orders);
        assert!(!caps.can_place_order);
    }

    #[test]
    fn client_only_places_orders() {
        let caps = Capabilities::for_roles(&[Role::CLIENT]);
        assert!(!caps.can_manage_catalog);
        assert!(!caps.can_view_all_orders);
        assert!(caps.can_place_order);
    }

    #[test]
    fn dual_role_account_receives_the_union() {
        let caps = Capabilities::for_roles(&[Role::ADMIN, Role::CLIENT]);
        assert!(caps.can_manage_catalog);
        assert!(caps.can_view_all_orders);
        assert!(caps.can_place_order);
    }

    #[test]
    fn unrecognized_roles_grant_nothing() {
        let caps = Capabilities::for_roles(&[Role::new("AUDITOR")]);
        assert_eq!(caps, Capabilities::NONE);
        assert_eq!(Capabilities::for_roles(&[]), Capabilities::NONE);
    }
}
