mod player_skill;
