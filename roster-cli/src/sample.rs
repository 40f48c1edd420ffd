//! Built-in roster, populated programmatically at startup.

use roster_core::{Coach, Player, Staff, Team};

pub fn sample_team() -> Team {
    let mut team = Team::new(
        "Philadelphia Eagles",
        "Nick Sirianni",
        "Lincoln Financial Field",
        "Based in Philadelphia, Pennsylvania, the Philadelphia Eagles are a professional \
         football team that plays in the National Football League's (NFL) East division of \
         the National Football Conference (NFC).",
    );

    team.add_player(Player::new(14, "Sam Howell", "Quarterback", "North Carolina"));
    team.add_player(Player::new(1, "Jalen Hurts", "Quarterback", "Oklahoma"));
    team.add_player(Player::new(16, "Tanner McKee", "Quarterback", "Stanford"));
    team.add_player(Player::new(26, "Saquon Barkley", "Running Back", "Penn State"));
    team.add_player(Player::new(29, "AJ Dillon", "Running Back", "Boston College"));
    team.add_player(Player::new(37, "Tank Bigsby", "Running Back", "Auburn"));
    team.add_player(Player::new(28, "Will Shipley", "Running Back", "Clemson"));
    team.add_player(Player::new(11, "A.J. Brown", "Wide Receiver", "Ole Miss"));
    team.add_player(Player::new(80, "Darius Cooper", "Wide Receiver", "Tarleton State"));
    team.add_player(Player::new(18, "Britain Covey", "Wide Receiver", "Utah"));
    team.add_player(Player::new(2, "Jahan Dotson", "Wide Receiver", "Penn State"));
    team.add_player(Player::new(6, "DeVonta Smith", "Wide Receiver", "Alabama"));
    team.add_player(Player::new(81, "Grant Calcaterra", "Tight End", "SMU"));
    team.add_player(Player::new(83, "Kylen Granson", "Tight End", "SMU"));
    team.add_player(Player::new(88, "Dallas Goedert", "Tight End", "South Dakota State"));
    team.add_player(Player::new(84, "E.J. Jenkins", "Tight End", "Georgia Tech"));
    team.add_player(Player::new(36, "Cameron Latu", "Tight End", "Alabama"));
    team.add_player(Player::new(51, "Cam Jurgens", "Center", "Nebraska"));
    team.add_player(Player::new(66, "Drew Kendall", "Center", "Boston College"));
    team.add_player(Player::new(64, "Brett Toth", "Center", "Army"));
    team.add_player(Player::new(69, "Landon Dickerson", "Guard", "Alabama"));
    team.add_player(Player::new(56, "Tyler Steen", "Guard", "Alabama"));
    team.add_player(Player::new(74, "Fred Johnson", "Offensive Tackle", "Florida"));
    team.add_player(Player::new(65, "Lane Johnson", "Offensive Tackle", "Oklahoma"));
    team.add_player(Player::new(68, "Jordan Mailata", "Offensive Tackle", "N/a"));
    team.add_player(Player::new(79, "Matt Pryor", "Offensive Tackle", "TCU"));
    team.add_player(Player::new(73, "Cameron Williams", "Offensive Tackle", "Texas"));
    team.add_player(Player::new(55, "Brandon Graham", "Defensive End", "Michigan"));
    team.add_player(Player::new(98, "Jalen Carter", "Defensive Tackle", "Georgia"));
    team.add_player(Player::new(90, "Jordan Davis", "Defensive Tackle", "Georgia"));
    team.add_player(Player::new(96, "Gabe Hall", "Defensive Tackle", "Baylor"));
    team.add_player(Player::new(97, "Moro Ojomo", "Defensive Tackle", "Texas"));
    team.add_player(Player::new(95, "Ty Robinson", "Defensive Tackle", "Nebraska"));
    team.add_player(Player::new(93, "Jacob Sykes", "Defensive Tackle", "UCLA"));
    team.add_player(Player::new(94, "Byron Young", "Defensive Tackle", "Alabama"));
    team.add_player(Player::new(53, "Zack Baun", "Linebacker", "Wisconsin"));
    team.add_player(Player::new(30, "Jihaad Campbell", "Linebacker", "Alabama"));
    team.add_player(Player::new(17, "Nakobe Dean", "Linebacker", "Georgia"));
    team.add_player(Player::new(58, "Jalyx Hunt", "Linebacker", "Houston Christian"));
    team.add_player(Player::new(42, "Smael Mondon Jr.", "Linebacker", "Georgia"));
    team.add_player(Player::new(50, "Jaelan Phillips", "Linebacker", "Miami"));
    team.add_player(Player::new(3, "Nolan Smith Jr.", "Linebacker", "Georgia"));
    team.add_player(Player::new(54, "Jeremiah Trotter Jr.", "Linebacker", "Clemson"));
    team.add_player(Player::new(23, "Jakorian Bennett", "Cornerback", "Maryland"));
    team.add_player(Player::new(35, "Michael Carter II", "Cornerback", "Duke"));
    team.add_player(Player::new(46, "Tariq Castro-Fields", "Cornerback", "Penn State"));
    team.add_player(Player::new(33, "Cooper DeJean", "Cornerback", "Iowa"));
    team.add_player(Player::new(8, "Adoree' Jackson", "Cornerback", "USC"));
    team.add_player(Player::new(49, "Brandon Johnson", "Cornerback", "Oregon"));
    team.add_player(Player::new(22, "Mac McWilliams", "Cornerback", "UCF"));
    team.add_player(Player::new(27, "Quinyon Mitchell", "Cornerback", "Toledo"));
    team.add_player(Player::new(7, "Kelee Ringo", "Cornerback", "Georgia"));
    team.add_player(Player::new(32, "Reed Blankenship", "Safety", "Middle Tennessee"));
    team.add_player(Player::new(21, "Sydney Brown", "Safety", "Illinois"));
    team.add_player(Player::new(39, "Marcus Epps", "Safety", "Wyoming"));
    team.add_player(Player::new(31, "Andre' Sam", "Safety", "LSU"));
    team.add_player(Player::new(4, "Jake Elliot", "Placekicker", "Memphis"));
    team.add_player(Player::new(10, "Bradden Mann", "Punter", "Texas A&M"));

    team.add_coach(Coach::new("Nick Sirianni", "Head Coach", "Offense"));
    team.add_coach(Coach::new("Joe Barry", "Defensive Coordinator", "Defense"));
    team.add_coach(Coach::new("Shane Steichen", "Offensive Coordinator", "Offense"));
    team.add_coach(Coach::new("Tim Hauck", "Linebacker Coach", "Defense"));
    team.add_coach(Coach::new("DeShawn Jackson", "Wide Receiver Coach", "Offense"));
    team.add_coach(Coach::new("Juan Castillo", "Defensive Line Coach", "Defense"));

    team.add_staff(Staff::new("Catherine Raîche", "Medical", "Team Physician"));
    team.add_staff(Staff::new("Tommy Specht", "Operations", "Strength & Conditioning Coach"));
    team.add_staff(Staff::new("Ryan Patrizio", "Communications", "Director of Communications"));
    team.add_staff(Staff::new("James Sexton", "Medical", "Head Athletic Trainer"));
    team.add_staff(Staff::new("Brett Drake", "Scouting", "Scout Director"));

    team.set_stat("Wins", 649);
    team.set_stat("Draws", 27);
    team.set_stat("Losses", 645);
    team.set_stat("NFL Championships", 5);

    team
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::JerseyNumber;

    #[test]
    fn sample_is_populated() {
        let team = sample_team();
        assert_eq!(team.player_count(), 58);
        assert_eq!(team.list_coaches().len(), 6);
        assert_eq!(team.list_staff().len(), 5);
        assert_eq!(
            team.get_player(JerseyNumber(1)).map(|p| p.name.as_str()),
            Some("Jalen Hurts")
        );
        let first = team.list_players().next().map(|p| p.number);
        assert_eq!(first, Some(JerseyNumber(14)));
    }
}
