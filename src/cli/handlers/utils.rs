use crate::model::User;
use colored::Colorize;

pub fn print_user_list(users: &[User]) {
    if users.is_empty() {
        println!("No users found.");
        return;
    }

    let width = users.iter().map(|u| u.email.len()).max().unwrap_or(0);
    for user in users {
        let email = format!("{:<width$}", user.email, width = width);
        println!(
            "{}  {} [{}]",
            email.cyan(),
            user.display_name,
            user.domain.blue()
        );
    }
}
