// Interactive front end: reads rolls at the lane and prints the scoreboard.

pub mod input;
pub mod report;
pub mod shell;
