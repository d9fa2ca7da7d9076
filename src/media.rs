/// Thumbnail and external video for a location row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationMedia {
    pub image: &'static str,
    pub link: &'static str,
}

pub fn media_for(location: &str) -> Option<LocationMedia> {
    LOCATION_MEDIA
        .iter()
        .find(|(name, _)| *name == location)
        .map(|(_, media)| *media)
}

const fn media(image: &'static str, link: &'static str) -> LocationMedia {
    LocationMedia { image, link }
}

const LOCATION_MEDIA: &[(&str, LocationMedia)] = &[
    ("Pantai Kuta", media("/static/img/pantai/kuta.jpg", "https://www.youtube.com/watch?v=6IFpJu7FuSY")),
    ("Pantai Nusa Dua", media("/static/img/pantai/nusa.jpg", "https://www.youtube.com/watch?v=Bj3fbJWGvlo")),
    ("Pantai Sanur", media("/static/img/pantai/sanur.jpg", "https://www.youtube.com/watch?v=9YVlsp0B5O4")),
    ("Pantai Seminyak", media("/static/img/pantai/seminyak.jpg", "https://www.youtube.com/watch?v=QVzUT9uL8KI")),
    ("Campuhan Ridge Walk", media("/static/img/gunung/campuhan.jpeg", "https://www.youtube.com/watch?v=HFhiu3stwS0")),
    ("Gunung Agung", media("/static/img/gunung/agung.jpg", "https://www.youtube.com/watch?v=ECk6mz8pldc")),
    ("Gunung Batukaru", media("/static/img/gunung/batukaru.webp", "https://www.youtube.com/watch?v=XbUxnsryHJQ")),
    ("Gunung Batur", media("/static/img/gunung/batur.jpg", "https://www.youtube.com/watch?v=_AkZ7aH9j5Q")),
    ("Blue Lagoon (Padangbai)", media("/static/img/snor/Blue.jpg", "https://www.youtube.com/watch?v=WRa8bcmAzW8")),
    ("Pantai Amed", media("/static/img/snor/amed.jpg", "https://www.youtube.com/watch?v=UzJUwYECGVM&list=RDUzJUwYECGVM&start_radio=1")),
    ("Pulau Menjangan", media("/static/img/snor/mejangan.webp", "https://www.youtube.com/watch?v=K82Y2cs_SGo&list=RDK82Y2cs_SGo&start_radio=1")),
    ("Tulamben (USAT Liberty)", media("/static/img/snor/tula.png", "https://www.youtube.com/watch?v=V-g_u1jGzwI")),
    ("Sungai Ayung", media("/static/img/rafting/ayung.jpg", "https://www.youtube.com/watch?v=6XiSFCp730A")),
    ("Sungai Melangit", media("/static/img/rafting/melangit.webp", "https://www.youtube.com/watch?v=rGyfAh0Cm6A")),
    ("Sungai Telaga Waja", media("/static/img/rafting/telaga.jpg", "https://www.youtube.com/watch?v=3VCUVQbYF1A")),
    ("Sungai Unda", media("/static/img/rafting/unda.jpg", "https://www.youtube.com/watch?v=nf8DYqLSDB8")),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::Activity;

    #[test]
    fn every_catalog_place_has_media() {
        for activity in Activity::ALL {
            for place in activity.places() {
                assert!(media_for(place.name).is_some(), "{}", place.name);
            }
        }
    }

    #[test]
    fn unknown_location_has_no_media() {
        assert_eq!(media_for("Pantai Lain"), None);
    }
}
