//! Display text for durations, clock times and labels.
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// The two display languages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ko,
    En,
}

/// Fixed UI strings for one locale.
#[derive(Debug)]
pub struct Labels {
    pub pick_end_time: &'static str,
    pub completed: &'static str,
    pub start_time: &'static str,
    pub end_time: &'static str,
    pub elapsed: &'static str,
    pub remaining: &'static str,
    pub waiting: &'static str,
    pub done: &'static str,
    pub start: &'static str,
    pub reset: &'static str,
    pub reset_prompt: &'static str,
    pub quit_prompt: &'static str,
    pub yes: &'static str,
    pub no: &'static str,
    pub show_selector: &'static str,
    pub hide_selector: &'static str,
    pub start_unavailable: &'static str,
    pub input_locked: &'static str,
}

const KO: Labels = Labels {
    pick_end_time: "종료 시각을 선택하세요",
    completed: "🎉 집중 완료!",
    start_time: "시작 시각",
    end_time: "종료 시각",
    elapsed: "경과 시간",
    remaining: "남은 시간",
    waiting: "타이머 대기 중",
    done: "완료!",
    start: "시작하기",
    reset: "초기화",
    reset_prompt: "초기화하시겠습니까?",
    quit_prompt: "타이머가 실행 중입니다. 종료할까요?",
    yes: "예",
    no: "아니오",
    show_selector: "시간 설정 열기",
    hide_selector: "시간 설정 닫기",
    start_unavailable: "1분 이후의 종료 시각을 입력하세요",
    input_locked: "타이머 실행 중에는 시간을 바꿀 수 없어요",
};

const EN: Labels = Labels {
    pick_end_time: "Pick an end time",
    completed: "🎉 Focus complete!",
    start_time: "Start",
    end_time: "End",
    elapsed: "Elapsed",
    remaining: "Remaining",
    waiting: "Waiting",
    done: "Done!",
    start: "Start",
    reset: "Reset",
    reset_prompt: "Reset the timer?",
    quit_prompt: "The timer is running. Quit anyway?",
    yes: "Yes",
    no: "No",
    show_selector: "Show time settings",
    hide_selector: "Hide time settings",
    start_unavailable: "Enter an end time at least a minute ahead",
    input_locked: "The end time is locked while the timer runs",
};

impl Locale {
    pub fn labels(self) -> &'static Labels {
        match self {
            Locale::Ko => &KO,
            Locale::En => &EN,
        }
    }

    /// "45분" / "1시간 5분"; negative values show as zero.
    pub fn format_minutes(self, total_minutes: i64) -> String {
        let total = total_minutes.max(0);
        let hours = total / 60;
        let minutes = total % 60;
        match (self, hours) {
            (Locale::Ko, 0) => format!("{minutes}분"),
            (Locale::Ko, _) => format!("{hours}시간 {minutes}분"),
            (Locale::En, 0) => format!("{minutes}m"),
            (Locale::En, _) => format!("{hours}h {minutes}m"),
        }
    }

    /// Headline while an end time is chosen but the timer is idle.
    pub fn focus_for(self, duration: &str) -> String {
        match self {
            Locale::Ko => format!("{duration} 집중하기"),
            Locale::En => format!("Focus for {duration}"),
        }
    }

    /// Two-line headline while running.
    pub fn focusing_until(self, end: &str, duration: &str) -> [String; 2] {
        match self {
            Locale::Ko => [format!("{end}까지"), format!("{duration}동안 집중해요")],
            Locale::En => [format!("Until {end}"), format!("focusing for {duration}")],
        }
    }
}

/// "HH:MM" on the local clock.
pub fn clock_time(instant: DateTime<Local>) -> String {
    instant.format("%H:%M").to_string()
}
