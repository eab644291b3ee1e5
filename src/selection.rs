//! Customer Selection

use std::slice;

use crate::customers::{Customer, CustomerId};

/// Customer id recorded on orders when no customer is bound to the sale.
pub const WALK_IN_CUSTOMER: &str = "walk-in-customer";

/// Customer bound to the sale in progress, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CustomerSelection {
    /// Walk-in sale
    #[default]
    Unselected,

    /// Sale attributed to a known customer
    Selected(CustomerId),
}

impl CustomerSelection {
    /// Bind the sale to `customer`.
    pub fn select(&mut self, customer: CustomerId) {
        *self = Self::Selected(customer);
    }

    /// Return to a walk-in sale.
    pub fn clear(&mut self) {
        *self = Self::Unselected;
    }

    /// The bound customer, if any.
    pub fn customer_id(&self) -> Option<&CustomerId> {
        match self {
            Self::Selected(id) => Some(id),
            Self::Unselected => None,
        }
    }

    /// The bound customer or the walk-in sentinel.
    pub fn customer_id_or_walk_in(&self) -> CustomerId {
        self.customer_id()
            .cloned()
            .unwrap_or_else(|| CustomerId::new(WALK_IN_CUSTOMER))
    }

    /// Whether a customer is bound.
    pub fn is_selected(&self) -> bool {
        matches!(self, Self::Selected(_))
    }
}

/// Lazy, restartable filter over a customer list.
///
/// Clone the iterator to walk the matches again from the start.
#[derive(Debug, Clone)]
pub struct CustomerMatches<'a> {
    customers: slice::Iter<'a, Customer>,
    needle: String,
}

impl<'a> Iterator for CustomerMatches<'a> {
    type Item = &'a Customer;

    fn next(&mut self) -> Option<Self::Item> {
        let needle = &self.needle;

        self.customers
            .find(|customer| customer.name.to_lowercase().contains(needle.as_str()))
    }
}

/// Customers whose display name contains `search`, ignoring case.
///
/// An empty search matches everyone.
pub fn filter_customers<'a>(customers: &'a [Customer], search: &str) -> CustomerMatches<'a> {
    CustomerMatches {
        customers: customers.iter(),
        needle: search.to_lowercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customers() -> Vec<Customer> {
        ["Ada Lovelace", "Grace Hopper", "Alan Turing"]
            .into_iter()
            .enumerate()
            .map(|(idx, name)| Customer {
                id: CustomerId::new(format!("c{idx}")),
                name: name.to_string(),
                email: String::new(),
                phone: String::new(),
                total_orders: 0,
                loyalty_points: 0,
            })
            .collect()
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let customers = customers();

        let names: Vec<_> = filter_customers(&customers, "A")
            .map(|c| c.name.as_str())
            .collect();

        assert_eq!(names, ["Ada Lovelace", "Grace Hopper", "Alan Turing"]);

        let names: Vec<_> = filter_customers(&customers, "tur")
            .map(|c| c.name.as_str())
            .collect();

        assert_eq!(names, ["Alan Turing"]);
    }

    #[test]
    fn filter_restarts_when_cloned() {
        let customers = customers();
        let matches = filter_customers(&customers, "ho");

        assert_eq!(matches.clone().count(), 1);
        assert_eq!(matches.count(), 1);
    }

    #[test]
    fn filter_with_no_match_is_empty() {
        let customers = customers();

        assert_eq!(filter_customers(&customers, "zzz").count(), 0);
    }

    #[test]
    fn unselected_falls_back_to_walk_in() {
        let mut selection = CustomerSelection::default();

        assert_eq!(selection.customer_id_or_walk_in().as_str(), WALK_IN_CUSTOMER);

        selection.select(CustomerId::new("c1"));
        assert_eq!(selection.customer_id_or_walk_in().as_str(), "c1");

        selection.clear();
        assert!(!selection.is_selected());
    }
}
