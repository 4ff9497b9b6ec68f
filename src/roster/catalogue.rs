use crate::core::Club;

/// KHL clubs used in prompts: (display name, logo asset)
const KHL_CLUBS: &[(&str, &str)] = &[
    ("Ak Bars Kazan", "Ак Барс.png"),
    ("Dinamo Minsk", "Динамо Минск.png"),
    ("Dynamo Moskva", "Динамо Москва"),
    ("SKA St. Petersburg", "СКА.png"),
    ("Severstal Cherepovets", "Северсталь"),
    ("CSKA Moskva", "ЦСКА"),
    ("Metallurg Magnitogorsk", "Металлург"),
    ("Lokomotiv Yaroslavl", "Локомотив"),
    ("Amur Khabarovsk", "Амур"),
    ("Avtomobilist Yekaterinburg", "Автомобилист"),
    ("Barys Astana", "Барыс"),
    ("Avangard Omsk", "Авангард"),
    ("Sibir Novosibirsk", "Сибирь"),
    ("Spartak Moskva", "Спартак"),
    ("Torpedo Nizhny Novgorod", "Торпедо"),
    ("Neftekhimik Nizhnekamsk", "Нефтехимик"),
    ("Lada Togliatti", "Лада"),
    ("Traktor Chelyabinsk", "Трактор"),
    ("Salavat Yulaev Ufa", "Салават Юлаев"),
];

/// Built-in club catalogue
pub fn default_clubs() -> Vec<Club> {
    KHL_CLUBS
        .iter()
        .map(|(name, logo)| Club::new(*name, *logo))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::ensure_playable;
    use std::collections::HashSet;

    #[test]
    fn test_catalogue_is_playable() {
        let clubs = default_clubs();
        assert_eq!(clubs.len(), 19);
        assert!(ensure_playable(&clubs).is_ok());
    }

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<String> = default_clubs()
            .iter()
            .map(|c| crate::ranking::clean_club_name(&c.name))
            .collect();
        assert_eq!(names.len(), 19);
    }
}
