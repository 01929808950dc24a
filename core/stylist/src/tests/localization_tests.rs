use crate::domain::{profile_for, ActiveLanguage, LabelKey, Language};
use crate::usecase::LocalizationUseCase;
use common::adapter::NoopLog;
use std::sync::Arc;
use std::thread;

fn use_case() -> LocalizationUseCase {
    LocalizationUseCase::new(Arc::new(NoopLog))
}

#[test]
fn test_initial_language_is_english() {
    let uc = use_case();
    let active = ActiveLanguage::default();
    assert_eq!(uc.active_labels(&active).language, Language::English);
    assert_eq!(
        uc.active_labels(&active).get(LabelKey::AskButton),
        Some("✋ Ask")
    );
}

#[test]
fn test_switch_then_read_resolves_every_key() {
    let uc = use_case();
    let active = ActiveLanguage::default();

    for language in Language::ALL {
        let switched = uc.switch_to(&active, language);
        let read = uc.active_labels(&active);
        assert_eq!(switched, read);
        assert_eq!(read.language, language);
        for key in LabelKey::ALL {
            let text = read.get(key).unwrap();
            assert!(!text.is_empty(), "{} empty in {}", key.as_str(), language);
        }
    }
}

#[test]
fn test_profiles_never_share_text_for_a_key() {
    let en = profile_for(Language::English);
    let fr = profile_for(Language::French);
    for key in LabelKey::ALL {
        assert_ne!(en.get(key), fr.get(key), "{} is identical", key.as_str());
    }
}

#[test]
fn test_active_labels_is_idempotent() {
    let uc = use_case();
    let active = ActiveLanguage::new(Language::French);
    let first = uc.active_labels(&active);
    let second = uc.active_labels(&active);
    assert!(std::ptr::eq(first, second));
    assert_eq!(first.relabel().unwrap(), second.relabel().unwrap());
}

#[test]
fn test_switch_returns_new_profile_immediately() {
    let uc = use_case();
    let active = ActiveLanguage::default();
    let profile = uc.switch_to(&active, Language::French);
    assert_eq!(
        profile.get(LabelKey::SelectedLanguage),
        Some("La langue sélectionnée est le français")
    );
    let profile = uc.switch_to(&active, Language::English);
    assert_eq!(
        profile.get(LabelKey::SelectedLanguage),
        Some("Selected Language is English")
    );
}

#[test]
fn test_concurrent_readers_see_whole_profiles() {
    let uc = Arc::new(use_case());
    let active = Arc::new(ActiveLanguage::default());

    let writer = {
        let uc = Arc::clone(&uc);
        let active = Arc::clone(&active);
        thread::spawn(move || {
            for i in 0..200 {
                let language = if i % 2 == 0 { Language::French } else { Language::English };
                uc.switch_to(&active, language);
            }
        })
    };
    let readers: Vec<_> = (0..4)
        .map(|_| {
            let uc = Arc::clone(&uc);
            let active = Arc::clone(&active);
            thread::spawn(move || {
                for _ in 0..200 {
                    let profile = uc.active_labels(&active);
                    let expected = profile_for(profile.language);
                    assert!(std::ptr::eq(profile, expected));
                    assert_eq!(profile.relabel().unwrap().len(), 17);
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for r in readers {
        r.join().unwrap();
    }
    assert_eq!(active.get(), Language::English);
}
