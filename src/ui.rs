use crate::activity::Activity;
use crate::config::RenderOptions;
use crate::media::media_for;
use crate::models::{DayForecast, LocationForecast};
use crate::summary::{
    aggregate, fill_percent, forecast_days_stat, headline_label, location_error, percent,
    ring_stroke, TOTAL_STROKE,
};
use crate::table::{short_date_label, table_header, DayEntry, DayId, TableHeader, DAY_COLUMNS};

const CARD_GRADIENTS: [&str; 4] = [
    "linear-gradient(135deg,#667eea 0%,#764ba2 100%)",
    "linear-gradient(135deg,#f093fb 0%,#f5576c 100%)",
    "linear-gradient(135deg,#4facfe 0%,#00f2fe 100%)",
    "linear-gradient(135deg,#43e97b 0%,#38f9d7 100%)",
];

/// Probability at or above which a badge reads as excellent.
const EXCELLENT_THRESHOLD: f64 = 0.6;

pub enum PageContent<'a> {
    Loaded(&'a [LocationForecast]),
    Failed(&'a str),
}

pub struct DashboardPage<'a> {
    pub activity: Activity,
    pub today: &'a str,
    pub now: &'a str,
    pub options: RenderOptions,
    pub content: PageContent<'a>,
}

pub fn render_index(page: &DashboardPage<'_>) -> String {
    let (main, error_hidden, main_hidden, error_message) = match page.content {
        PageContent::Loaded(locations) => (
            render_main(locations, page.activity, page.options),
            " hidden",
            "",
            String::new(),
        ),
        PageContent::Failed(message) => (String::new(), "", " hidden", html_escape(message)),
    };

    INDEX_HTML
        .replace("{{TODAY}}", &html_escape(page.today))
        .replace("{{NOW}}", &html_escape(page.now))
        .replace("{{ACTIVITY_PICKER}}", &render_activity_picker(page.activity))
        .replace("{{ERROR_HIDDEN}}", error_hidden)
        .replace("{{ERROR_MESSAGE}}", &error_message)
        .replace("{{MAIN_HIDDEN}}", main_hidden)
        .replace("{{MAIN}}", &main)
}

fn render_main(locations: &[LocationForecast], activity: Activity, options: RenderOptions) -> String {
    let header = table_header(locations);
    let stats = if options.show_stats {
        render_stats(locations)
    } else {
        String::new()
    };
    format!(
        r#"{stats}
      <section class="summary-cards" id="summary-cards">{cards}</section>
      <section class="table-card">
        <table class="comparison">
          <thead><tr><th class="location-col">Lokasi</th>{head}</tr></thead>
          <tbody id="table-body">{body}</tbody>
        </table>
      </section>"#,
        cards = render_summary_cards(locations, activity, options),
        head = render_table_head(&header),
        body = render_table_body(locations, &header, activity, options),
    )
}

fn render_activity_picker(current: Activity) -> String {
    Activity::ALL
        .iter()
        .map(|activity| {
            let places = activity
                .places()
                .iter()
                .map(|p| format!("{} ({:.4}, {:.4})", p.name, p.lat, p.lon))
                .collect::<Vec<_>>()
                .join("\n");
            format!(
                r#"<label class="activity-option" title="{places}"><input type="radio" name="activity" value="{value}"{checked}><span>{title}</span></label>"#,
                places = html_escape(&places),
                value = activity.label(),
                checked = if *activity == current { " checked" } else { "" },
                title = activity.title(),
            )
        })
        .collect()
}

pub fn render_stats(locations: &[LocationForecast]) -> String {
    format!(
        r#"<section class="stats">
        <div class="stat"><span class="label">Lokasi</span><span class="value" id="stat-locations">{}</span></div>
        <div class="stat"><span class="label">Hari Prakiraan</span><span class="value" id="stat-days">{}</span></div>
      </section>"#,
        locations.len(),
        forecast_days_stat(locations)
    )
}

/// One card per location; failed locations get an isolated error card.
pub fn render_summary_cards(
    locations: &[LocationForecast],
    activity: Activity,
    options: RenderOptions,
) -> String {
    let mut out = String::new();
    for (i, location) in locations.iter().enumerate() {
        let Some(agg) = aggregate(location, activity.label()) else {
            out.push_str(&format!(
                r#"
        <div class="summary-card error-card">
          <h6>{name}</h6>
          <p class="error-text">{error}</p>
        </div>"#,
                name = html_escape(&location.beach),
                error = html_escape(&location_error(location)),
            ));
            continue;
        };

        let headline = agg.headline(options.summary_mode);
        // Fill follows the rendered text, not the aggregate.
        let pct = fill_percent(&headline);
        out.push_str(&format!(
            r#"
        <div class="summary-card" style="--card-gradient:{gradient}">
          <h6 class="location-name">{name}</h6>
          <div class="score-circle" data-ring="{pct}">
            <svg class="progress-ring" width="120" height="120" aria-label="Persentase Kecocokan">
              <circle class="progress-ring-bg" cx="60" cy="60" r="54"></circle>
              <circle class="progress-ring-fill" cx="60" cy="60" r="54" style="stroke-dasharray:{stroke:.2} {total}"></circle>
            </svg>
            <div class="score-text">
              <div class="score-number">{headline}</div>
              <div class="score-label">{label}</div>
            </div>
          </div>
        </div>"#,
            gradient = CARD_GRADIENTS[i % CARD_GRADIENTS.len()],
            name = html_escape(&location.beach),
            stroke = ring_stroke(pct),
            total = TOTAL_STROKE,
            label = headline_label(options.summary_mode),
        ));
    }
    out
}

pub fn render_table_head(header: &TableHeader) -> String {
    (0..DAY_COLUMNS)
        .map(|i| {
            let is_today = i == header.today_index;
            let label = header
                .dates
                .get(i)
                .map(|iso| short_date_label(iso))
                .unwrap_or_else(|| format!("H+{i}"));
            let class = if is_today { " class=\"today-highlight\"" } else { "" };
            if is_today {
                format!(
                    r#"<th id="day-header-{i}"{class}><strong>HARI INI</strong><br><small>{}</small></th>"#,
                    html_escape(&label)
                )
            } else {
                format!(r#"<th id="day-header-{i}"{class}>{}</th>"#, html_escape(&label))
            }
        })
        .collect()
}

/// Rows share the header's today column regardless of their own dates.
pub fn render_table_body(
    locations: &[LocationForecast],
    header: &TableHeader,
    activity: Activity,
    options: RenderOptions,
) -> String {
    let mut out = String::new();
    for (li, location) in locations.iter().enumerate() {
        out.push_str("\n          <tr class=\"location-row\">");
        out.push_str(&render_location_cell(location, options));
        if location.ok {
            for di in 0..DAY_COLUMNS {
                let id = DayId { location: li, day: di };
                out.push_str(&render_cell(
                    location.days().get(di),
                    id,
                    di == header.today_index,
                    activity,
                    options,
                ));
            }
        } else {
            out.push_str(&format!(
                r#"<td colspan="{DAY_COLUMNS}" class="row-error">Error: {}</td>"#,
                html_escape(&location_error(location))
            ));
        }
        out.push_str("</tr>");
    }
    out
}

fn render_location_cell(location: &LocationForecast, options: RenderOptions) -> String {
    let name = html_escape(&location.beach);
    let meta = if location.ok {
        format!(
            r#"<div class="location-meta">&#9728; {} - {}</div>"#,
            html_escape(location.sunrise.as_deref().unwrap_or("-")),
            html_escape(location.sunset.as_deref().unwrap_or("-"))
        )
    } else {
        String::new()
    };
    let text = format!(r#"<div class="location-name-badge">{name}</div>{meta}"#);

    match media_for(&location.beach).filter(|_| options.media_thumbnails) {
        Some(media) => format!(
            r#"<td class="location-cell"><a href="{link}" target="_blank" rel="noopener noreferrer" class="location-link"><div class="location-thumb"><img src="{image}" alt="{name}" loading="lazy"></div>{text}</a></td>"#,
            link = html_escape(media.link),
            image = html_escape(media.image),
        ),
        None => format!(r#"<td class="location-cell">{text}</td>"#),
    }
}

/// A day cell: badge from the activity's prediction (fail at 0 when there is
/// none), three metrics, and a detail trigger that references the day by id.
pub fn render_cell(
    day: Option<&DayForecast>,
    id: DayId,
    is_today: bool,
    activity: Activity,
    options: RenderOptions,
) -> String {
    let Some(day) = day else {
        return r#"<td class="day-cell empty">-</td>"#.to_string();
    };

    let prediction = day.prediction_for(activity.label());
    let passes = prediction.is_some_and(|p| p.qualifies());
    let proba = prediction.map_or(0.0, |p| p.probability());
    let badge_text = if options.percent_badges {
        format!(r#"<span class="badge-percent">{}%</span>"#, percent(proba))
    } else {
        String::new()
    };

    format!(
        r#"<td class="day-cell{today_class}">{today_badge}<div class="cell-content"><div class="prediction-badge {badge_class}" data-proba="{pct}"><span class="badge-icon">{icon}</span>{badge_text}</div><div class="weather-info"><div class="weather-item">{temp}&deg;C</div><div class="weather-item">{rain}mm</div><div class="weather-item">{sun}h</div></div><a class="detail-btn" href="/day/{activity}/{id}" data-day="{id}">Detail</a></div></td>"#,
        today_class = if is_today { " today-cell" } else { "" },
        today_badge = if is_today {
            r#"<div class="today-badge">HARI INI</div>"#
        } else {
            ""
        },
        badge_class = if passes { "badge-excellent" } else { "badge-poor" },
        pct = percent(proba),
        icon = if passes { "&#10003;" } else { "&#10007;" },
        temp = metric(day.temp_avg),
        rain = metric(day.rain_mm),
        sun = metric(day.sunshine_h),
    )
}

/// Colour class for a bare probability, used by the detail panel.
pub fn badge_class(proba: f64) -> &'static str {
    if proba >= EXCELLENT_THRESHOLD {
        "badge-excellent"
    } else {
        "badge-poor"
    }
}

/// Modal body for one day.
pub fn render_day_detail(entry: &DayEntry, activity: Activity) -> String {
    let day = &entry.day;
    let verdict = match day.prediction_for(activity.label()) {
        Some(p) => format!(
            r#"<p class="detail-verdict {class}">{title}: {verdict} ({pct}%)</p>"#,
            class = badge_class(p.probability()),
            title = activity.title(),
            verdict = if p.qualifies() { "Layak" } else { "Tidak layak" },
            pct = percent(p.probability()),
        ),
        None => String::new(),
    };

    format!(
        r#"<div class="detail-panel">
  <h5 class="modal-title" id="modal-title">Detail: {date}</h5>
  <p class="detail-location">{location}</p>
  {verdict}
  <div class="detail-section">
    <h6>Kondisi Cuaca</h6>
    <div class="weather-stats">
      <div class="weather-stat"><div class="stat-value">{tmin}&deg;C - {tmax}&deg;C</div><div class="stat-label">Suhu Rata-Rata: {tavg}&deg;C</div></div>
      <div class="weather-stat"><div class="stat-value">{hum}%</div><div class="stat-label">Kelembaban Rata-Rata</div></div>
      <div class="weather-stat"><div class="stat-value">{wind} km/h</div><div class="stat-label">Kecepatan Angin Rata-Rata</div></div>
      <div class="weather-stat"><div class="stat-value">{rain} mm</div><div class="stat-label">Curah Hujan (total)</div></div>
      <div class="weather-stat"><div class="stat-value">{sun} h</div><div class="stat-label">Lama Penyinaran Matahari</div></div>
    </div>
  </div>
</div>"#,
        date = html_escape(&short_date_label(&day.date_iso)),
        location = html_escape(&entry.location),
        tmin = metric(day.temp_min),
        tmax = metric(day.temp_max),
        tavg = metric(day.temp_avg),
        hum = metric(day.humidity_avg),
        wind = metric(day.wind_kmh_avg),
        rain = metric(day.rain_mm),
        sun = metric(day.sunshine_h),
    )
}

fn metric(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="id">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Prakiraan Aktivitas Bali</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef6fb;
      --bg-2: #bfe3f2;
      --ink: #1f2a33;
      --accent: #667eea;
      --good: #2d9d63;
      --bad: #c63b2b;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 24px 60px rgba(31, 42, 51, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e4f1f7 60%, #f4f9fb 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(1180px, 100%);
      margin: 0 auto;
      background: var(--card);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 24px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-size: clamp(1.8rem, 4vw, 2.5rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #5b6670;
    }

    .activities {
      display: flex;
      flex-wrap: wrap;
      gap: 8px;
    }

    .activity-option input {
      display: none;
    }

    .activity-option span {
      display: inline-block;
      padding: 8px 16px;
      border-radius: 999px;
      background: rgba(31, 42, 51, 0.06);
      cursor: pointer;
      font-weight: 600;
    }

    .activity-option input:checked + span {
      background: var(--accent);
      color: white;
    }

    .stats, .summary-cards {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
      gap: 16px;
    }

    .stat, .summary-card {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(31, 42, 51, 0.08);
      text-align: center;
    }

    .stat .label {
      display: block;
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #7b858d;
    }

    .stat .value {
      font-size: 1.6rem;
      font-weight: 600;
    }

    .score-circle {
      position: relative;
      width: 120px;
      height: 120px;
      margin: 0 auto;
    }

    .progress-ring {
      transform: rotate(-90deg);
    }

    .progress-ring-bg {
      fill: none;
      stroke: rgba(31, 42, 51, 0.08);
      stroke-width: 10;
    }

    .progress-ring-fill {
      fill: none;
      stroke: var(--accent);
      stroke-width: 10;
      stroke-linecap: round;
    }

    .score-text {
      position: absolute;
      inset: 0;
      display: grid;
      place-content: center;
    }

    .score-number {
      font-size: 1.5rem;
      font-weight: 600;
    }

    .score-label, .error-text, .location-meta {
      font-size: 0.8rem;
      color: #6b757d;
    }

    .error-card .error-text, .row-error, .error-panel {
      color: var(--bad);
    }

    .table-card {
      overflow-x: auto;
    }

    table.comparison {
      width: 100%;
      border-collapse: collapse;
    }

    .comparison th, .comparison td {
      padding: 10px;
      border-bottom: 1px solid rgba(31, 42, 51, 0.08);
      text-align: center;
      vertical-align: top;
    }

    .today-highlight, .today-cell {
      background: rgba(102, 126, 234, 0.08);
    }

    .today-badge {
      font-size: 0.7rem;
      font-weight: 600;
      color: var(--accent);
    }

    .location-link {
      color: inherit;
      text-decoration: none;
    }

    .location-thumb img {
      width: 96px;
      height: 64px;
      object-fit: cover;
      border-radius: 10px;
    }

    .prediction-badge {
      display: inline-flex;
      gap: 4px;
      padding: 4px 10px;
      border-radius: 999px;
      color: white;
      font-weight: 600;
    }

    .badge-excellent {
      background: var(--good);
    }

    .badge-poor {
      background: var(--bad);
    }

    .detail-verdict.badge-excellent, .detail-verdict.badge-poor {
      display: inline-block;
      padding: 4px 12px;
      border-radius: 999px;
      color: white;
    }

    .weather-item {
      font-size: 0.85rem;
    }

    .detail-btn {
      display: inline-block;
      margin-top: 6px;
      font-size: 0.8rem;
      color: var(--accent);
    }

    .hidden {
      display: none !important;
    }

    .modal {
      position: fixed;
      inset: 0;
      background: rgba(31, 42, 51, 0.45);
      display: grid;
      place-items: center;
      padding: 18px;
    }

    .modal-dialog {
      background: white;
      border-radius: 20px;
      padding: 24px;
      width: min(760px, 100%);
      position: relative;
    }

    .modal-close {
      position: absolute;
      top: 12px;
      right: 12px;
      border: none;
      background: none;
      font-size: 1.4rem;
      cursor: pointer;
    }

    .weather-stats {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(120px, 1fr));
      gap: 12px;
    }

    .weather-stat {
      background: rgba(31, 42, 51, 0.04);
      border-radius: 14px;
      padding: 12px;
    }

    .stat-value {
      font-weight: 600;
    }

    .stat-label {
      font-size: 0.75rem;
      color: #6b757d;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Prakiraan Aktivitas Bali</h1>
      <p class="subtitle">{{TODAY}} &middot; diperbarui {{NOW}}</p>
    </header>

    <form class="activities" id="activity-form" method="get" action="/">{{ACTIVITY_PICKER}}</form>

    <div id="loading-state" class="hidden">Memuat data...</div>
    <div id="error-state" class="error-panel{{ERROR_HIDDEN}}"><strong>Gagal memuat data:</strong> <span id="error-message">{{ERROR_MESSAGE}}</span></div>
    <div id="main-content" class="{{MAIN_HIDDEN}}">{{MAIN}}
    </div>
  </main>

  <div id="detailModal" class="modal hidden" role="dialog" aria-modal="true">
    <div class="modal-dialog">
      <button class="modal-close" type="button" aria-label="Tutup">&times;</button>
      <div id="modal-body"></div>
    </div>
  </div>

  <script>
    const form = document.getElementById('activity-form');
    const modal = document.getElementById('detailModal');
    const modalBody = document.getElementById('modal-body');

    form.querySelectorAll('input[name="activity"]').forEach((radio) => {
      radio.addEventListener('change', () => {
        document.getElementById('main-content').classList.add('hidden');
        document.getElementById('error-state').classList.add('hidden');
        document.getElementById('loading-state').classList.remove('hidden');
        form.submit();
      });
    });

    document.querySelectorAll('.detail-btn').forEach((link) => {
      link.addEventListener('click', async (event) => {
        event.preventDefault();
        const res = await fetch(link.getAttribute('href'));
        modalBody.innerHTML = res.ok ? await res.text() : '<p class="error-panel">Detail tidak tersedia</p>';
        modal.classList.remove('hidden');
      });
    });

    const closeModal = () => modal.classList.add('hidden');
    modal.querySelector('.modal-close').addEventListener('click', closeModal);
    modal.addEventListener('click', (event) => {
      if (event.target === modal) {
        closeModal();
      }
    });
  </script>
</body>
</html>
"#;
