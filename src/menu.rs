use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

use chrono::NaiveDate;
use tracing::{debug, instrument};

use crate::database::Database;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    AddPerson,
    Search,
    Load,
    Save,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(choice: &str) -> Result<Self, Self::Err> {
        match choice.trim() {
            "1" => Ok(MenuChoice::AddPerson),
            "2" => Ok(MenuChoice::Search),
            "3" => Ok(MenuChoice::Load),
            "4" => Ok(MenuChoice::Save),
            "5" => Ok(MenuChoice::Exit),
            other => Err(other.to_owned()),
        }
    }
}

/// Line-oriented front end for a [`Database`]. Reads answers from `input`,
/// writes prompts and results to `output`.
pub struct Menu<'a, R, W> {
    database: &'a mut Database,
    input: R,
    output: W,
    default_file: PathBuf,
    today: fn() -> NaiveDate,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(
        database: &'a mut Database,
        input: R,
        output: W,
        default_file: PathBuf,
        today: fn() -> NaiveDate,
    ) -> Self {
        Menu {
            database,
            input,
            output,
            default_file,
            today,
        }
    }

    /// Runs until the user picks exit or the input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.prompt("Оберіть пункт меню: ")? else {
                return Ok(());
            };

            let keep_going = match choice.parse::<MenuChoice>() {
                Ok(MenuChoice::Exit) => false,
                Ok(choice) => self.dispatch(choice)?,
                Err(_) => {
                    writeln!(self.output, "Неправильний вибір. Спробуйте ще раз.")?;
                    true
                }
            };
            if !keep_going {
                return Ok(());
            }
        }
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "\nМеню:")?;
        writeln!(self.output, "1. Додати нову людину")?;
        writeln!(self.output, "2. Пошук людини")?;
        writeln!(self.output, "3. Завантажити дані з файлу")?;
        writeln!(self.output, "4. Зберегти дані у файл")?;
        writeln!(self.output, "5. Вийти")
    }

    /// `Ok(false)` when the input ran out mid-action.
    #[instrument(skip(self))]
    fn dispatch(&mut self, choice: MenuChoice) -> io::Result<bool> {
        match choice {
            MenuChoice::AddPerson => self.add_person(),
            MenuChoice::Search => self.search(),
            MenuChoice::Load => self.load(),
            MenuChoice::Save => self.save(),
            MenuChoice::Exit => Ok(false),
        }
    }

    fn add_person(&mut self) -> io::Result<bool> {
        const PROMPTS: [&str; 6] = [
            "Ім'я: ",
            "Прізвище: ",
            "По-батькові: ",
            "Дата народження (дд.мм.рррр): ",
            "Дата смерті (дд.мм.рррр, залиште порожнім, якщо жива): ",
            "Стать (m/f): ",
        ];

        let mut answers = Vec::with_capacity(PROMPTS.len());
        for prompt in PROMPTS {
            match self.prompt(prompt)? {
                Some(answer) => answers.push(answer),
                None => return Ok(false),
            }
        }

        let result = self.database.add_person(
            &answers[0],
            &answers[1],
            &answers[2],
            &answers[3],
            &answers[4],
            &answers[5],
        );
        if let Err(error) = result {
            writeln!(self.output, "Помилка: {}", error)?;
        }
        Ok(true)
    }

    fn search(&mut self) -> io::Result<bool> {
        let Some(query) = self.prompt("Введіть ім'я для пошуку: ")? else {
            return Ok(false);
        };

        let today = (self.today)();
        let found = self.database.search(&query);
        if found.is_empty() {
            writeln!(self.output, "Нікого не знайдено.")?;
        }
        for person in found {
            writeln!(self.output, "{}", person.format_display(today))?;
        }
        Ok(true)
    }

    fn load(&mut self) -> io::Result<bool> {
        let Some(path) = self.prompt_file("Введіть назву файлу для завантаження: ")? else {
            return Ok(false);
        };

        match self.database.load_from_file(&path) {
            Ok(_) => writeln!(self.output, "Дані завантажено.")?,
            Err(error) => writeln!(self.output, "Помилка: {}", error)?,
        }
        Ok(true)
    }

    fn save(&mut self) -> io::Result<bool> {
        let Some(path) = self.prompt_file("Введіть назву файлу для збереження: ")? else {
            return Ok(false);
        };

        match self.database.save_to_file(&path) {
            Ok(_) => writeln!(self.output, "Дані збережено.")?,
            Err(error) => writeln!(self.output, "Помилка: {}", error)?,
        }
        Ok(true)
    }

    fn prompt_file(&mut self, message: &str) -> io::Result<Option<PathBuf>> {
        let message = format!("{}[{}] ", message, self.default_file.display());
        Ok(self.prompt(&message)?.map(|answer| {
            if answer.is_empty() {
                self.default_file.clone()
            } else {
                PathBuf::from(answer)
            }
        }))
    }

    /// Next input line without its line terminator, `None` at end of input.
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("input closed");
            return Ok(None);
        }
        let answer = line.trim_end_matches(['\n', '\r']).to_owned();
        Ok(Some(answer))
    }
}
