//! Common test fixtures

#![allow(dead_code)]

use usergrid_core::{GridConfig, GridState, User};

/// `user1..userN`, every fifth one an admin
pub fn numbered_users(n: usize) -> Vec<User> {
    (1..=n)
        .map(|i| {
            User::new(
                i.to_string(),
                format!("user{}", i),
                format!("user{}@example.com", i),
                if i % 5 == 0 { "admin" } else { "member" },
            )
        })
        .collect()
}

/// A small roster with mixed-case names and roles
pub fn roster() -> Vec<User> {
    vec![
        User::new("1", "Aaron Miles", "aaron@mailinator.com", "member"),
        User::new("2", "Aishwarya Naik", "aishwarya@mailinator.com", "member"),
        User::new("3", "Arvind Kumar", "arvind@mailinator.com", "admin"),
        User::new("4", "Caterina Binotto", "caterina@mailinator.com", "member"),
        User::new("5", "Chetan Kumar", "chetan@mailinator.com", "member"),
        User::new("6", "Jim McClain", "jim@mailinator.com", "member"),
        User::new("7", "Mahaveer Singh", "mahaveer@mailinator.com", "member"),
        User::new("8", "Rahul Jain", "rahul@mailinator.com", "admin"),
        User::new("9", "Rizan Khan", "rizan@mailinator.com", "member"),
        User::new("10", "Sarah Potter", "sarah@mailinator.com", "admin"),
        User::new("11", "Keshav Muddaiah", "keshav@mailinator.com", "member"),
        User::new("12", "Nita Ramesh", "nita@mailinator.com", "member"),
    ]
}

pub fn grid(users: Vec<User>) -> GridState<User> {
    GridState::new(users, GridConfig::default()).expect("default config is valid")
}

pub fn ids(rows: &[&User]) -> Vec<String> {
    rows.iter().map(|u| u.id.clone()).collect()
}

pub fn names(rows: &[&User]) -> Vec<String> {
    rows.iter().map(|u| u.name.clone()).collect()
}

pub fn selected_ids(grid: &GridState<User>) -> Vec<String> {
    grid.selection().iter().map(|u| u.id.clone()).collect()
}
