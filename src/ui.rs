pub fn render_index(date: &str, entry_count: usize) -> String {
    INDEX_HTML
        .replace("{{DATE}}", date)
        .replace("{{COUNT}}", &entry_count.to_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Gut Journal</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef6f1;
      --bg-2: #cfe8dc;
      --ink: #22312b;
      --accent: #2d8a6b;
      --accent-2: #3c5a6e;
      --danger: #c6533b;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(60, 90, 110, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e3f1e9 60%, #f2f7f0 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(920px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-wrap: wrap;
      align-items: baseline;
      justify-content: space-between;
      gap: 6px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #5a6a61;
      font-size: 1rem;
    }

    h2 {
      margin: 0;
      font-size: 1.3rem;
    }

    .tabs {
      display: flex;
      gap: 6px;
      padding: 6px;
      background: rgba(60, 90, 110, 0.08);
      border-radius: 999px;
      width: fit-content;
    }

    .tab {
      background: transparent;
      border: none;
      border-radius: 999px;
      padding: 8px 16px;
      font-size: 0.9rem;
      font-weight: 600;
      color: #5c6a63;
      cursor: pointer;
    }

    .tab.active {
      background: white;
      color: var(--accent-2);
      box-shadow: 0 8px 16px rgba(60, 90, 110, 0.12);
    }

    form {
      background: white;
      border-radius: 20px;
      padding: 20px;
      border: 1px solid rgba(60, 90, 110, 0.08);
      display: grid;
      gap: 14px;
    }

    form.hidden {
      display: none;
    }

    label {
      display: grid;
      gap: 6px;
      font-size: 0.9rem;
      font-weight: 600;
      color: #48564e;
    }

    input[type="text"],
    input[type="datetime-local"],
    select,
    textarea {
      font: inherit;
      border: 1px solid rgba(60, 90, 110, 0.2);
      border-radius: 12px;
      padding: 10px 12px;
      background: #fbfdfc;
    }

    textarea {
      min-height: 60px;
      resize: vertical;
    }

    .check {
      display: flex;
      align-items: center;
      gap: 10px;
      font-weight: 600;
      font-size: 0.9rem;
      color: #48564e;
    }

    .row {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 14px;
    }

    .edit-when.hidden {
      display: none;
    }

    .form-actions {
      display: flex;
      gap: 10px;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 20px;
      font-size: 0.95rem;
      font-weight: 600;
      cursor: pointer;
      transition: transform 150ms ease;
    }

    button:active {
      transform: scale(0.98);
    }

    .btn-save {
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(45, 138, 107, 0.3);
    }

    .btn-ghost {
      background: rgba(60, 90, 110, 0.1);
      color: var(--accent-2);
    }

    .btn-ghost.hidden {
      display: none;
    }

    .log-list {
      display: grid;
      gap: 10px;
    }

    .log-row {
      background: white;
      border-radius: 16px;
      border: 1px solid rgba(60, 90, 110, 0.08);
      padding: 14px 16px;
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 10px;
    }

    .log-row .when {
      font-size: 0.8rem;
      color: #77857c;
      display: block;
    }

    .log-row .what {
      font-weight: 500;
    }

    .kind {
      display: inline-block;
      font-size: 0.72rem;
      font-weight: 600;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      border-radius: 999px;
      padding: 3px 10px;
      margin-right: 8px;
    }

    .kind-symptom { background: #fdeee8; color: var(--danger); }
    .kind-intake { background: #e7f3ec; color: var(--accent); }
    .kind-stress { background: #e9eff4; color: var(--accent-2); }

    .row-actions {
      display: flex;
      gap: 8px;
    }

    .row-actions button {
      padding: 8px 14px;
      font-size: 0.85rem;
    }

    .btn-delete {
      background: #fdeee8;
      color: var(--danger);
    }

    .chart-card {
      background: white;
      border-radius: 20px;
      padding: 16px;
      border: 1px solid rgba(60, 90, 110, 0.08);
    }

    #chart {
      width: 100%;
      height: 260px;
      display: block;
    }

    #chart text {
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
    }

    .chart-grid { stroke: rgba(60, 90, 110, 0.12); }
    .chart-label { fill: #77857c; font-size: 11px; }
    .series-cramps { stroke: var(--danger); }
    .series-bloating { stroke: var(--accent); }
    .series-stress { stroke: var(--accent-2); }
    .chart-series { fill: none; stroke-width: 3; }
    .chart-dot { stroke-width: 2; fill: white; }

    .legend {
      display: flex;
      gap: 18px;
      font-size: 0.85rem;
      color: #5a6a61;
    }

    .legend span::before {
      content: "";
      display: inline-block;
      width: 10px;
      height: 10px;
      border-radius: 50%;
      margin-right: 6px;
    }

    .legend .cramps::before { background: var(--danger); }
    .legend .bloating::before { background: var(--accent); }
    .legend .stress::before { background: var(--accent-2); }

    .status {
      font-size: 0.95rem;
      color: #5c6a63;
      min-height: 1.2em;
    }

    .status[data-type="error"] { color: #c6533b; }
    .status[data-type="ok"] { color: #2d7a4b; }

    .toolbar {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
    }

    @keyframes rise {
      from { opacity: 0; transform: translateY(18px); }
      to { opacity: 1; transform: translateY(0); }
    }

    @media (max-width: 600px) {
      .app { padding: 28px 22px; }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <div>
        <h1>Gut Journal</h1>
        <p class="subtitle">{{DATE}} &middot; {{COUNT}} entries so far</p>
      </div>
      <button class="btn-ghost" id="notify-btn" type="button">Enable reminders</button>
    </header>

    <section>
      <div class="toolbar">
        <div class="tabs" role="tablist">
          <button class="tab active" type="button" data-form="symptom" role="tab">Symptom</button>
          <button class="tab" type="button" data-form="intake" role="tab">Food &amp; drink</button>
          <button class="tab" type="button" data-form="stress" role="tab">Stress</button>
        </div>
        <span class="status" id="stress-hint"></span>
      </div>
    </section>

    <form id="symptom-form">
      <div class="row">
        <label>Bowel movement (Bristol 1-7)
          <select name="bowelMovement">
            <option value="">Not recorded</option>
            <option value="1">1 &ndash; Separate hard lumps</option>
            <option value="2">2 &ndash; Lumpy, sausage-like</option>
            <option value="3">3 &ndash; Sausage with cracks</option>
            <option value="4">4 &ndash; Smooth and soft</option>
            <option value="5">5 &ndash; Soft blobs</option>
            <option value="6">6 &ndash; Mushy, ragged edges</option>
            <option value="7">7 &ndash; Entirely liquid</option>
          </select>
        </label>
        <label>Cramps (0-5)
          <select name="crampsSeverity">
            <option value="">Not recorded</option>
            <option value="0">0</option><option value="1">1</option><option value="2">2</option>
            <option value="3">3</option><option value="4">4</option><option value="5">5</option>
          </select>
        </label>
        <label>Bloating (0-5)
          <select name="bloatingSeverity">
            <option value="">Not recorded</option>
            <option value="0">0</option><option value="1">1</option><option value="2">2</option>
            <option value="3">3</option><option value="4">4</option><option value="5">5</option>
          </select>
        </label>
      </div>
      <label class="check"><input type="checkbox" name="urgency" /> Urgency</label>
      <label>Notes<textarea name="notes"></textarea></label>
      <label class="edit-when hidden">Date &amp; time<input type="datetime-local" name="when" step="60" /></label>
      <div class="form-actions">
        <button class="btn-save" type="submit">Save symptom</button>
        <button class="btn-ghost hidden cancel-edit" type="button">Cancel edit</button>
      </div>
    </form>

    <form id="intake-form" class="hidden">
      <div class="row">
        <label>What did you have?<input type="text" name="item" placeholder="e.g. oat porridge" /></label>
        <label>Quantity<input type="text" name="quantity" placeholder="e.g. 1 bowl" /></label>
      </div>
      <label>Notes<textarea name="notes"></textarea></label>
      <label class="edit-when hidden">Date &amp; time<input type="datetime-local" name="when" step="60" /></label>
      <div class="form-actions">
        <button class="btn-save" type="submit">Save intake</button>
        <button class="btn-ghost hidden cancel-edit" type="button">Cancel edit</button>
      </div>
    </form>

    <form id="stress-form" class="hidden">
      <label>Stress level (0-5)
        <select name="level">
          <option value="0">0 &ndash; Calm</option><option value="1">1</option><option value="2">2</option>
          <option value="3">3</option><option value="4">4</option><option value="5">5 &ndash; Overwhelmed</option>
        </select>
      </label>
      <label>Notes<textarea name="notes"></textarea></label>
      <label class="edit-when hidden">Date &amp; time<input type="datetime-local" name="when" step="60" /></label>
      <div class="form-actions">
        <button class="btn-save" type="submit">Save stress</button>
        <button class="btn-ghost hidden cancel-edit" type="button">Cancel edit</button>
      </div>
    </form>

    <section class="chart-area">
      <div class="toolbar">
        <h2>Daily trend</h2>
        <div class="legend">
          <span class="cramps">Cramps</span>
          <span class="bloating">Bloating</span>
          <span class="stress">Stress</span>
        </div>
      </div>
      <div class="chart-card">
        <svg id="chart" viewBox="0 0 640 260" aria-label="Daily severity chart" role="img"></svg>
      </div>
    </section>

    <section>
      <div class="toolbar">
        <h2>Journal</h2>
        <button class="btn-ghost" id="export-btn" type="button">Export JSON</button>
      </div>
      <div class="log-list" id="log-list"></div>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const statusEl = document.getElementById('status');
    const stressHintEl = document.getElementById('stress-hint');
    const chartEl = document.getElementById('chart');
    const listEl = document.getElementById('log-list');
    const notifyBtn = document.getElementById('notify-btn');
    const tabs = Array.from(document.querySelectorAll('.tab'));
    const forms = {
      symptom: document.getElementById('symptom-form'),
      intake: document.getElementById('intake-form'),
      stress: document.getElementById('stress-form')
    };

    let logs = [];
    let editingId = null;

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const escapeHtml = (text) =>
      String(text).replace(/[&<>"']/g, (ch) => ({
        '&': '&amp;', '<': '&lt;', '>': '&gt;', '"': '&quot;', "'": '&#39;'
      })[ch]);

    const setActiveForm = (kind) => {
      tabs.forEach((tab) => tab.classList.toggle('active', tab.dataset.form === kind));
      Object.entries(forms).forEach(([name, form]) =>
        form.classList.toggle('hidden', name !== kind));
    };

    const stopEditing = () => {
      editingId = null;
      Object.values(forms).forEach((form) => {
        form.reset();
        form.querySelector('.edit-when').classList.add('hidden');
        form.querySelector('.cancel-edit').classList.add('hidden');
      });
    };

    const toLocalInputValue = (ts) => {
      const d = new Date(ts);
      const pad = (n) => String(n).padStart(2, '0');
      return `${d.getFullYear()}-${pad(d.getMonth() + 1)}-${pad(d.getDate())}` +
        `T${pad(d.getHours())}:${pad(d.getMinutes())}`;
    };

    const describe = (entry) => {
      if (entry.type === 'symptom') {
        const parts = [];
        if (entry.bowelMovement !== undefined) parts.push(`Bristol ${entry.bowelMovement}`);
        if (entry.crampsSeverity !== undefined) parts.push(`cramps ${entry.crampsSeverity}`);
        if (entry.bloatingSeverity !== undefined) parts.push(`bloating ${entry.bloatingSeverity}`);
        if (entry.urgency) parts.push('urgent');
        if (entry.notes) parts.push(escapeHtml(entry.notes));
        return parts.join(' &middot; ') || 'No details';
      }
      if (entry.type === 'intake') {
        let text = escapeHtml(entry.item);
        if (entry.quantity) text += ` (${escapeHtml(entry.quantity)})`;
        if (entry.notes) text += ` &middot; ${escapeHtml(entry.notes)}`;
        return text;
      }
      let text = `Level ${entry.level}`;
      if (entry.notes) text += ` &middot; ${escapeHtml(entry.notes)}`;
      return text;
    };

    const renderList = () => {
      if (!logs.length) {
        listEl.innerHTML = '<p class="subtitle">Nothing logged yet.</p>';
        return;
      }
      listEl.innerHTML = logs.map((entry) => `
        <div class="log-row">
          <div>
            <span class="kind kind-${entry.type}">${entry.type}</span>
            <span class="what">${describe(entry)}</span>
            <span class="when">${new Date(entry.timestamp).toLocaleString()}</span>
          </div>
          <div class="row-actions">
            <button class="btn-ghost" type="button" data-edit="${entry.id}">Edit</button>
            <button class="btn-delete" type="button" data-delete="${entry.id}">Delete</button>
          </div>
        </div>`).join('');
    };

    const renderChart = (points) => {
      if (points.length < 2) {
        chartEl.innerHTML =
          '<text class="chart-label" x="50%" y="50%" text-anchor="middle">' +
          'Not enough data to chart yet &mdash; log on at least two days.</text>';
        return;
      }

      const width = 640;
      const height = 260;
      const paddingX = 40;
      const paddingY = 34;
      const top = 20;
      const maxValue = 5;

      const xStep = (width - paddingX * 2) / (points.length - 1);
      const x = (index) => paddingX + index * xStep;
      const y = (value) => height - paddingY - (value / maxValue) * (height - top - paddingY);

      let grid = '';
      for (let v = 0; v <= maxValue; v += 1) {
        grid += `<line class="chart-grid" x1="${paddingX}" y1="${y(v)}" x2="${width - paddingX}" y2="${y(v)}" />`;
        grid += `<text class="chart-label" x="${paddingX - 10}" y="${y(v) + 4}" text-anchor="end">${v}</text>`;
      }

      const labelEvery = points.length > 8 ? Math.ceil(points.length / 8) : 1;
      const xLabels = points.map((point, index) => {
        if (index % labelEvery !== 0) return '';
        return `<text class="chart-label" x="${x(index)}" y="${height - paddingY + 18}" text-anchor="middle">${point.date.slice(5)}</text>`;
      }).join('');

      const series = (channel) => {
        let path = '';
        let dots = '';
        let drawing = false;
        points.forEach((point, index) => {
          const value = point[channel];
          if (value === null || value === undefined) {
            drawing = false;
            return;
          }
          path += `${drawing ? 'L' : 'M'} ${x(index).toFixed(2)} ${y(value).toFixed(2)} `;
          dots += `<circle class="chart-dot series-${channel}" cx="${x(index)}" cy="${y(value)}" r="4" />`;
          drawing = true;
        });
        return `<path class="chart-series series-${channel}" d="${path.trim()}" />${dots}`;
      };

      chartEl.innerHTML = grid + xLabels +
        series('cramps') + series('bloating') + series('stress');
    };

    const loadLogs = async () => {
      const res = await fetch('/api/logs');
      if (!res.ok) throw new Error('Unable to load the journal');
      logs = (await res.json()).entries;
      renderList();
    };

    const loadChart = async () => {
      const res = await fetch('/api/chart');
      if (!res.ok) throw new Error('Unable to load chart data');
      renderChart((await res.json()).points);
    };

    const refresh = () => Promise.all([loadLogs(), loadChart()]);

    const submitEntry = async (payload, form) => {
      setStatus('Saving...', 'info');
      let res;
      if (editingId) {
        const whenValue = form.elements.when.value;
        const timestamp = new Date(whenValue).getTime();
        if (!Number.isFinite(timestamp)) {
          setStatus('That date and time could not be parsed; entry not saved.', 'error');
          return;
        }
        res = await fetch(`/api/logs/${editingId}`, {
          method: 'PUT',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify({ ...payload, id: editingId, timestamp })
        });
      } else {
        res = await fetch('/api/logs', {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify(payload)
        });
      }

      if (!res.ok) {
        const message = await res.text();
        if (res.status === 409) {
          alert('Stress is already logged for today. Edit the existing entry instead.');
          stopEditing();
          setStatus('', '');
          return;
        }
        setStatus(message || 'Request failed', 'error');
        return;
      }

      stopEditing();
      setStatus('Saved', 'ok');
      setTimeout(() => setStatus('', ''), 1200);
      refresh().catch((err) => setStatus(err.message, 'error'));
      pollReminder().catch(() => {});
    };

    forms.symptom.addEventListener('submit', (event) => {
      event.preventDefault();
      const el = forms.symptom.elements;
      const payload = { type: 'symptom' };
      if (el.bowelMovement.value !== '') payload.bowelMovement = Number(el.bowelMovement.value);
      if (el.crampsSeverity.value !== '') payload.crampsSeverity = Number(el.crampsSeverity.value);
      if (el.bloatingSeverity.value !== '') payload.bloatingSeverity = Number(el.bloatingSeverity.value);
      if (el.urgency.checked) payload.urgency = true;
      if (el.notes.value.trim()) payload.notes = el.notes.value.trim();
      submitEntry(payload, forms.symptom).catch((err) => setStatus(err.message, 'error'));
    });

    forms.intake.addEventListener('submit', (event) => {
      event.preventDefault();
      const el = forms.intake.elements;
      if (!el.item.value.trim()) {
        setStatus('Please enter what you ate or drank.', 'error');
        return;
      }
      const payload = { type: 'intake', item: el.item.value.trim() };
      if (el.quantity.value.trim()) payload.quantity = el.quantity.value.trim();
      if (el.notes.value.trim()) payload.notes = el.notes.value.trim();
      submitEntry(payload, forms.intake).catch((err) => setStatus(err.message, 'error'));
    });

    forms.stress.addEventListener('submit', (event) => {
      event.preventDefault();
      const el = forms.stress.elements;
      const payload = { type: 'stress', level: Number(el.level.value) };
      if (el.notes.value.trim()) payload.notes = el.notes.value.trim();
      submitEntry(payload, forms.stress).catch((err) => setStatus(err.message, 'error'));
    });

    const startEdit = (id) => {
      const entry = logs.find((candidate) => candidate.id === id);
      if (!entry) return;
      stopEditing();
      editingId = id;
      setActiveForm(entry.type);
      const form = forms[entry.type];
      const el = form.elements;
      if (entry.type === 'symptom') {
        el.bowelMovement.value = entry.bowelMovement ?? '';
        el.crampsSeverity.value = entry.crampsSeverity ?? '';
        el.bloatingSeverity.value = entry.bloatingSeverity ?? '';
        el.urgency.checked = Boolean(entry.urgency);
      } else if (entry.type === 'intake') {
        el.item.value = entry.item;
        el.quantity.value = entry.quantity ?? '';
      } else {
        el.level.value = entry.level;
      }
      el.notes.value = entry.notes ?? '';
      el.when.value = toLocalInputValue(entry.timestamp);
      form.querySelector('.edit-when').classList.remove('hidden');
      form.querySelector('.cancel-edit').classList.remove('hidden');
      form.scrollIntoView({ behavior: 'smooth' });
    };

    const deleteEntry = async (id) => {
      if (!confirm('Delete this entry? This cannot be undone.')) return;
      const res = await fetch(`/api/logs/${id}`, { method: 'DELETE' });
      if (!res.ok) throw new Error('Delete failed');
      if (editingId === id) stopEditing();
      await refresh();
    };

    listEl.addEventListener('click', (event) => {
      const editId = event.target.dataset.edit;
      const deleteId = event.target.dataset.delete;
      if (editId) startEdit(editId);
      if (deleteId) deleteEntry(deleteId).catch((err) => setStatus(err.message, 'error'));
    });

    tabs.forEach((tab) => {
      tab.addEventListener('click', () => {
        stopEditing();
        setActiveForm(tab.dataset.form);
      });
    });

    Object.values(forms).forEach((form) => {
      form.querySelector('.cancel-edit').addEventListener('click', stopEditing);
    });

    document.getElementById('export-btn').addEventListener('click', async () => {
      const res = await fetch('/api/export');
      if (!res.ok) {
        setStatus((await res.text()) || 'Nothing to export yet.', 'error');
        return;
      }
      const disposition = res.headers.get('content-disposition') || '';
      const match = disposition.match(/filename="([^"]+)"/);
      const blob = await res.blob();
      const link = document.createElement('a');
      link.href = URL.createObjectURL(blob);
      link.download = match ? match[1] : 'gut_journal.json';
      link.click();
      URL.revokeObjectURL(link.href);
    });

    const pollReminder = async () => {
      const res = await fetch('/api/reminder');
      if (!res.ok) return;
      const data = await res.json();
      stressHintEl.textContent = data.stress_logged_today
        ? 'Stress logged for today' : '';
      if (data.remind && 'Notification' in window && Notification.permission === 'granted') {
        new Notification('Gut Journal', { body: 'How stressed were you today?' });
      }
    };

    if (!('Notification' in window) || Notification.permission !== 'default') {
      notifyBtn.style.display = 'none';
    }
    notifyBtn.addEventListener('click', async () => {
      // Denied permission just means no reminders; everything else works.
      await Notification.requestPermission();
      notifyBtn.style.display = 'none';
    });

    setInterval(() => pollReminder().catch(() => {}), 5 * 60 * 1000);

    refresh().catch((err) => setStatus(err.message, 'error'));
    pollReminder().catch(() => {});
  </script>
</body>
</html>
"#;
